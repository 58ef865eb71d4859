use crate::error::AppError;
use crate::model::responses::CouriersResponse;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the RMS settings, delivery settings and stop list endpoints
///
/// Everything here is read-only reference data scoped to the configured
/// organization.
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Protocols supported by the organization
    async fn supported_protocols(&self) -> Result<Value, AppError>;

    /// All roles defined in the organization
    async fn roles(&self) -> Result<Value, AppError>;

    /// All employees of the organization
    async fn employees(&self) -> Result<Value, AppError>;

    /// All restaurant sections (halls) of the organization
    async fn restaurant_sections(&self) -> Result<Value, AppError>;

    /// The order type directory
    async fn order_types(&self) -> Result<Value, AppError>;

    /// External payment types
    async fn payment_types(&self) -> Result<Value, AppError>;

    /// Marketing sources
    async fn marketing_sources(&self) -> Result<Value, AppError>;

    /// All couriers of the organization
    async fn couriers(&self) -> Result<CouriersResponse, AppError>;

    /// Discounts available for delivery orders
    async fn delivery_discounts(&self) -> Result<Value, AppError>;

    /// Delivery restaurants connected to this restaurant
    async fn delivery_terminals(&self) -> Result<Value, AppError>;

    /// Working restrictions and delivery zones
    async fn delivery_restrictions(&self) -> Result<Value, AppError>;

    /// Customer survey questions for a completed delivery
    ///
    /// # Arguments
    /// * `order_id` - The delivered order; must be non-empty
    async fn survey_items(&self, order_id: &str) -> Result<Value, AppError>;

    /// Settings for the courier mobile application
    async fn courier_mobile_settings(&self) -> Result<Value, AppError>;

    /// Products currently on the delivery stop list
    async fn delivery_stop_list(&self) -> Result<Value, AppError>;
}
