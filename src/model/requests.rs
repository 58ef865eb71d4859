//! Request models for the iiko.biz API
//!
//! The remote contract is camelCase JSON; ad-hoc fields the caller wants to
//! pass through verbatim go into the flattened `extra` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Query-side filter for the delivery orders listing
///
/// All fields are optional; empty fields are omitted from the query string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryOrdersFilter {
    /// Start of the reporting interval (remote date format)
    pub date_from: Option<String>,
    /// End of the reporting interval
    pub date_to: Option<String>,
    /// Delivery status to filter by (e.g. `DELIVERED`, `ON_WAY`)
    pub delivery_status: Option<String>,
    /// Delivery terminal to filter by
    pub delivery_terminal_id: Option<String>,
}

impl DeliveryOrdersFilter {
    /// Renders the filter as query pairs, skipping unset fields
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(v) = &self.date_from {
            pairs.push((String::from("dateFrom"), v.clone()));
        }
        if let Some(v) = &self.date_to {
            pairs.push((String::from("dateTo"), v.clone()));
        }
        if let Some(v) = &self.delivery_status {
            pairs.push((String::from("deliveryStatus"), v.clone()));
        }
        if let Some(v) = &self.delivery_terminal_id {
            pairs.push((String::from("deliveryTerminalId"), v.clone()));
        }
        pairs
    }
}

/// Body of the delivery confirmation POST
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOrderDeliveredRequest {
    /// Identifier of the confirmed order
    pub order_id: String,
    /// Whether the order reached the customer
    pub delivered: bool,
    /// Additional fields passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SetOrderDeliveredRequest {
    /// Creates a confirmation for the given order
    pub fn new(order_id: impl Into<String>, delivered: bool) -> Self {
        Self {
            order_id: order_id.into(),
            delivered,
            extra: Map::new(),
        }
    }
}

/// Kind of OLAP report exposed by the reports endpoint group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OlapReportType {
    /// Sales report
    Sales,
    /// Transactions report
    Transactions,
    /// Deliveries report
    Deliveries,
}

impl OlapReportType {
    /// Wire name of the report type
    pub fn as_str(&self) -> &'static str {
        match self {
            OlapReportType::Sales => "Sales",
            OlapReportType::Transactions => "Transactions",
            OlapReportType::Deliveries => "Deliveries",
        }
    }
}

impl fmt::Display for OlapReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an OLAP report request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OlapReportRequest {
    /// Which report to build
    pub report_type: OlapReportType,
    /// Report parameters (grouping, filters, date range) passed through
    /// verbatim; the remote schema is large and evolves server-side
    #[serde(flatten)]
    pub parameters: Map<String, Value>,
}

impl OlapReportRequest {
    /// Creates a request for the given report type with no extra parameters
    pub fn new(report_type: OlapReportType) -> Self {
        Self {
            report_type,
            parameters: Map::new(),
        }
    }
}

/// Body of an events-journal request
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsRequest {
    /// Organizations to query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizations: Option<Vec<String>>,
    /// Start of the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// End of the interval
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    /// Event types to include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    /// Additional fields passed through verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
