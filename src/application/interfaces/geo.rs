use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the cities, streets and regions endpoints
///
/// This reference data is used to compose delivery addresses.
#[async_trait]
pub trait GeoService: Send + Sync {
    /// All cities with their streets
    async fn cities(&self) -> Result<Value, AppError>;

    /// Cities of the configured organization, without streets
    async fn cities_list(&self) -> Result<Value, AppError>;

    /// Streets of a city
    ///
    /// # Arguments
    /// * `city_id` - Identifier of the city; must be non-empty
    async fn streets(&self, city_id: &str) -> Result<Value, AppError>;

    /// Regions from the organization's region directory
    async fn regions(&self) -> Result<Value, AppError>;
}
