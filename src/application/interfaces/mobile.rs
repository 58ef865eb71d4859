use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the courier mobile application endpoints
#[async_trait]
pub trait MobileService: Send + Sync {
    /// Logs a delivery courier in on the remote RMS server
    async fn signin(&self, request: &Value) -> Result<Value, AppError>;

    /// Performs a full sync between the mobile application and the delivery
    /// server: pushes delivery changes and courier GPS positions, receives
    /// the courier's current deliveries
    async fn sync(&self, request: &Value) -> Result<Value, AppError>;
}
