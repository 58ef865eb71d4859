use crate::application::services::OrganizationService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::responses::OrganizationInfo;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the organization service
pub struct OrganizationServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> OrganizationServiceImpl<T> {
    /// Creates a new instance of the organization service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// Gets the current configuration
    pub fn get_config(&self) -> Arc<Config> {
        self.config.clone()
    }
}

#[async_trait]
impl<T: BizHttpClient + 'static> OrganizationService for OrganizationServiceImpl<T> {
    async fn list(&self) -> Result<Vec<OrganizationInfo>, AppError> {
        info!("Getting organization list");

        let result: Vec<OrganizationInfo> = self
            .client
            .get("api/0/organization/list", &[])
            .await?;

        debug!("Organization list obtained: {} organizations", result.len());
        Ok(result)
    }

    async fn info(&self) -> Result<OrganizationInfo, AppError> {
        let org = &self.config.credentials.organization;
        let path = format!("api/0/organization/{org}");
        info!("Getting organization info: {}", org);

        self.client.get(&path, &[]).await
    }

    async fn corporate_nutritions(&self) -> Result<Value, AppError> {
        let org = &self.config.credentials.organization;
        let path = format!("api/0/organization/{org}/corporate_nutritions");
        info!("Getting corporate nutrition programs");

        self.client.get(&path, &[]).await
    }

    async fn nomenclature(&self) -> Result<Value, AppError> {
        let org = &self.config.credentials.organization;
        let path = format!("api/0/nomenclature/{org}");
        info!("Getting nomenclature of organization: {}", org);

        self.client.get(&path, &[]).await
    }
}
