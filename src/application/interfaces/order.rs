use crate::error::AppError;
use crate::model::requests::{DeliveryOrdersFilter, SetOrderDeliveredRequest};
use crate::model::responses::DeliveryOrdersResponse;
use async_trait::async_trait;
use reqwest::StatusCode;

/// Interface for the order endpoints
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Lists delivery orders of the configured organization
    ///
    /// # Arguments
    /// * `filter` - Optional date range, status and terminal constraints
    async fn delivery_orders(
        &self,
        filter: &DeliveryOrdersFilter,
    ) -> Result<DeliveryOrdersResponse, AppError>;

    /// Lists the active orders assigned to a courier
    ///
    /// # Arguments
    /// * `courier_id` - Identifier of the courier; must be non-empty
    async fn courier_orders(&self, courier_id: &str) -> Result<DeliveryOrdersResponse, AppError>;

    /// Confirms that an order was delivered
    ///
    /// The remote answers with a bare status code; it is returned as-is.
    async fn set_order_delivered(
        &self,
        request: &SetOrderDeliveredRequest,
    ) -> Result<StatusCode, AppError>;
}
