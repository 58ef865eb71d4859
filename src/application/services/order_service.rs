use crate::application::services::{OrderService, require};
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::{DeliveryOrdersFilter, SetOrderDeliveredRequest};
use crate::model::responses::DeliveryOrdersResponse;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info};

const DELIVERY_ORDERS: &str = "api/0/orders/deliveryOrders";
const COURIER_ORDERS: &str = "api/0/orders/get_courier_orders";
const SET_ORDER_DELIVERED: &str = "api/0/orders/set_order_delivered";

/// Implementation of the order service
pub struct OrderServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> OrderServiceImpl<T> {
    /// Creates a new instance of the order service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Query pairs common to all order endpoints
    fn base_query(&self) -> Vec<(String, String)> {
        vec![
            (
                String::from("organization"),
                self.config.credentials.organization.clone(),
            ),
            (
                String::from("request_timeout"),
                self.config.request_timeout.clone(),
            ),
        ]
    }
}

#[async_trait]
impl<T: BizHttpClient + 'static> OrderService for OrderServiceImpl<T> {
    async fn delivery_orders(
        &self,
        filter: &DeliveryOrdersFilter,
    ) -> Result<DeliveryOrdersResponse, AppError> {
        let mut query = self.base_query();
        query.extend(filter.to_query());
        info!("Getting delivery orders");

        let result: DeliveryOrdersResponse = self.client.get(DELIVERY_ORDERS, &query).await?;

        debug!(
            "Delivery orders obtained: {} orders",
            result.delivery_orders.len()
        );
        Ok(result)
    }

    async fn courier_orders(&self, courier_id: &str) -> Result<DeliveryOrdersResponse, AppError> {
        require(COURIER_ORDERS, "courier", courier_id)?;

        let mut query = self.base_query();
        query.push((String::from("courier"), courier_id.to_string()));
        info!("Getting active orders of courier: {}", courier_id);

        let result: DeliveryOrdersResponse = self.client.get(COURIER_ORDERS, &query).await?;

        debug!(
            "Courier orders obtained: {} orders",
            result.delivery_orders.len()
        );
        Ok(result)
    }

    async fn set_order_delivered(
        &self,
        request: &SetOrderDeliveredRequest,
    ) -> Result<StatusCode, AppError> {
        require(SET_ORDER_DELIVERED, "orderId", &request.order_id)?;

        let query = self.base_query();
        info!("Confirming delivery of order: {}", request.order_id);

        let status = self
            .client
            .request_status(SET_ORDER_DELIVERED, &query, Some(request))
            .await?;

        debug!("Delivery confirmation answered with status: {}", status);
        Ok(status)
    }
}
