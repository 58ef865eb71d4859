use crate::application::services::LoyaltyService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const CALCULATE_CHECKIN: &str = "api/0/orders/calculate_checkin_result";
const COMBOS_INFO: &str = "api/0/orders/get_combos_info";
const MANUAL_CONDITIONS: &str = "api/0/orders/get_manual_condition_infos";
const COMBO_PRICE: &str = "api/0/orders/check_and_get_combo_price";

/// Implementation of the loyalty service
pub struct LoyaltyServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> LoyaltyServiceImpl<T> {
    /// Creates a new instance of the loyalty service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    fn org_query(&self) -> Vec<(String, String)> {
        vec![(
            String::from("organization"),
            self.config.credentials.organization.clone(),
        )]
    }
}

#[async_trait]
impl<T: BizHttpClient + 'static> LoyaltyService for LoyaltyServiceImpl<T> {
    async fn calculate_checkin(&self, order: &Value) -> Result<Value, AppError> {
        info!("Calculating loyalty program for order draft");
        self.client.post(CALCULATE_CHECKIN, &[], order).await
    }

    async fn combos_info(&self) -> Result<Value, AppError> {
        info!("Getting combos and combo categories");
        self.client.get(COMBOS_INFO, &self.org_query()).await
    }

    async fn manual_conditions(&self) -> Result<Value, AppError> {
        info!("Getting manual conditions");
        self.client.get(MANUAL_CONDITIONS, &self.org_query()).await
    }

    async fn combo_price(&self, request: &Value) -> Result<Value, AppError> {
        info!("Checking combo dish and calculating its price");
        self.client
            .post(COMBO_PRICE, &self.org_query(), request)
            .await
    }
}
