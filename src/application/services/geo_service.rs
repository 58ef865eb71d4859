use crate::application::services::{GeoService, require};
use crate::config::Config;
use crate::error::AppError;
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const CITIES: &str = "api/0/cities/cities";
const CITIES_LIST: &str = "api/0/cities/citiesList";
const STREETS: &str = "api/0/streets/streets";
const REGIONS: &str = "api/0/regions/regions";

/// Implementation of the cities/streets/regions service
pub struct GeoServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> GeoServiceImpl<T> {
    /// Creates a new instance of the geo service
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
impl<T: BizHttpClient + 'static> GeoService for GeoServiceImpl<T> {
    async fn cities(&self) -> Result<Value, AppError> {
        info!("Getting cities with streets");
        self.client.get(CITIES, &self.org_query()).await
    }

    async fn cities_list(&self) -> Result<Value, AppError> {
        info!("Getting city list");
        self.client.get(CITIES_LIST, &self.org_query()).await
    }

    async fn streets(&self, city_id: &str) -> Result<Value, AppError> {
        require(STREETS, "city", city_id)?;

        let mut query = self.org_query();
        query.push((String::from("city"), city_id.to_string()));
        info!("Getting streets of city: {}", city_id);

        self.client.get(STREETS, &query).await
    }

    async fn regions(&self) -> Result<Value, AppError> {
        info!("Getting regions");
        self.client.get(REGIONS, &self.org_query()).await
    }
}
