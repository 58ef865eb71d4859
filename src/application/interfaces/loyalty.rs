use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for loyalty-program calculation and combo endpoints
#[async_trait]
pub trait LoyaltyService: Send + Sync {
    /// Calculates the loyalty program outcome for an order draft
    ///
    /// # Arguments
    /// * `order` - The order request the program should be applied to,
    ///   passed through verbatim
    async fn calculate_checkin(&self, order: &Value) -> Result<Value, AppError>;

    /// Gets every combo and combo category of the configured organization
    async fn combos_info(&self) -> Result<Value, AppError>;

    /// Gets the manual conditions applicable to an order
    async fn manual_conditions(&self) -> Result<Value, AppError>;

    /// Validates an assembled combo dish and calculates its price
    async fn combo_price(&self, request: &Value) -> Result<Value, AppError>;
}
