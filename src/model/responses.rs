//! Response models for the iiko.biz API
//!
//! Only the payloads with a stable documented shape are typed; report and
//! settings endpoints return server-defined structures and surface as raw
//! `serde_json::Value`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor of an organization as returned by the organization list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationInfo {
    /// Organization identifier
    pub id: String,
    /// Display name
    pub name: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Remaining descriptor fields (logo, coordinates, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An employee record from the RMS settings endpoints; couriers are
/// employees with the courier role
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Employee identifier
    pub id: String,
    /// Login name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Human-readable name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Short code used at the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Whether the record has been removed in the RMS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    /// Remaining fields (roles, phone, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of the courier listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouriersResponse {
    /// Courier users of the organization
    #[serde(default)]
    pub users: Vec<Employee>,
}

/// Response of the delivery order listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryOrdersResponse {
    /// Matching delivery orders; the order schema is large and server-owned
    #[serde(default)]
    pub delivery_orders: Vec<Value>,
}
