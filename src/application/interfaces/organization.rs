use crate::error::AppError;
use crate::model::responses::OrganizationInfo;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the organization endpoints
///
/// Intended for integrations that display organizations with names,
/// descriptions, logos and contact information.
#[async_trait]
pub trait OrganizationService: Send + Sync {
    /// Lists every organization visible to this API login
    async fn list(&self) -> Result<Vec<OrganizationInfo>, AppError>;

    /// Gets the descriptor of the configured organization
    async fn info(&self) -> Result<OrganizationInfo, AppError>;

    /// Gets the active corporate nutrition programs of the configured
    /// organization
    async fn corporate_nutritions(&self) -> Result<Value, AppError>;

    /// Gets the menu (nomenclature) of the configured organization
    async fn nomenclature(&self) -> Result<Value, AppError>;
}
