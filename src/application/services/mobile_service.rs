use crate::application::services::MobileService;
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const SIGNIN: &str = "api/0/mobile/signin";
const SYNC: &str = "api/0/mobile/sync";

/// Implementation of the courier mobile application service
pub struct MobileServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> MobileServiceImpl<T> {
    /// Creates a new instance of the mobile service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

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
impl<T: BizHttpClient + 'static> MobileService for MobileServiceImpl<T> {
    async fn signin(&self, request: &Value) -> Result<Value, AppError> {
        info!("Signing courier in on the RMS server");
        self.client.post(SIGNIN, &self.base_query(), request).await
    }

    async fn sync(&self, request: &Value) -> Result<Value, AppError> {
        info!("Syncing courier mobile application");
        self.client.post(SYNC, &self.base_query(), request).await
    }
}
