use crate::application::services::{SettingsService, require};
use crate::config::Config;
use crate::error::AppError;
use crate::model::responses::CouriersResponse;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

const SURVEY_ITEMS: &str = "api/0/deliverySettings/getSurveyItems";
const COURIERS: &str = "api/0/rmsSettings/getCouriers";

/// Implementation of the settings service
///
/// Covers the rmsSettings, deliverySettings and stopLists endpoint groups;
/// every method is a GET scoped to the configured organization.
pub struct SettingsServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> SettingsServiceImpl<T> {
    /// Creates a new instance of the settings service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    fn org_query(&self) -> Vec<(String, String)> {
        vec![(
            String::from("organization"),
            self.config.credentials.organization.clone(),
        )]
    }

    async fn get_scoped(&self, endpoint: &str) -> Result<Value, AppError> {
        debug!("Getting {}", endpoint);
        self.client.get(endpoint, &self.org_query()).await
    }
}

#[async_trait]
impl<T: BizHttpClient + 'static> SettingsService for SettingsServiceImpl<T> {
    async fn supported_protocols(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/supportedProtocols").await
    }

    async fn roles(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getRoles").await
    }

    async fn employees(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getEmployees").await
    }

    async fn restaurant_sections(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getRestaurantSections")
            .await
    }

    async fn order_types(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getOrderTypes").await
    }

    async fn payment_types(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getPaymentTypes").await
    }

    async fn marketing_sources(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/rmsSettings/getMarketingSources").await
    }

    async fn couriers(&self) -> Result<CouriersResponse, AppError> {
        info!("Getting couriers");

        let result: CouriersResponse = self.client.get(COURIERS, &self.org_query()).await?;

        debug!("Couriers obtained: {} users", result.users.len());
        Ok(result)
    }

    async fn delivery_discounts(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/deliverySettings/deliveryDiscounts")
            .await
    }

    async fn delivery_terminals(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/deliverySettings/getDeliveryTerminals")
            .await
    }

    async fn delivery_restrictions(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/deliverySettings/getDeliveryRestrictions")
            .await
    }

    async fn survey_items(&self, order_id: &str) -> Result<Value, AppError> {
        require(SURVEY_ITEMS, "orderId", order_id)?;

        let mut query = self.org_query();
        query.push((String::from("orderId"), order_id.to_string()));
        info!("Getting survey items for order: {}", order_id);

        self.client.get(SURVEY_ITEMS, &query).await
    }

    async fn courier_mobile_settings(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/deliverySettings/getDeliveryCourierMobileSettings")
            .await
    }

    async fn delivery_stop_list(&self) -> Result<Value, AppError> {
        self.get_scoped("api/0/stopLists/getDeliveryStopList").await
    }
}
