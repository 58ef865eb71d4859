use crate::error::AppError;
use crate::model::requests::{EventsRequest, OlapReportRequest, OlapReportType};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the OLAP report, events journal and notices endpoints
///
/// These endpoints scope the tenant with the `organizationId` query key
/// instead of `organization`; the implementation takes care of that.
#[async_trait]
pub trait ReportService: Send + Sync {
    /// Column metadata of an OLAP report type
    async fn olap_columns(&self, report_type: OlapReportType) -> Result<Value, AppError>;

    /// Builds an OLAP report
    async fn olap(&self, request: &OlapReportRequest) -> Result<Value, AppError>;

    /// The preconfigured OLAP report presets of the organization
    async fn olap_presets(&self) -> Result<Value, AppError>;

    /// Builds a preconfigured OLAP report
    async fn olap_by_preset(&self, request: &Value) -> Result<Value, AppError>;

    /// Reads the events journal
    async fn events(&self, request: &EventsRequest) -> Result<Value, AppError>;

    /// Reads the events journal metadata
    async fn events_metadata(&self, request: &EventsRequest) -> Result<Value, AppError>;

    /// Cash register sessions for an operating day
    async fn cash_sessions(&self, request: &EventsRequest) -> Result<Value, AppError>;

    /// Publishes notices to the events journal
    async fn notices(&self, request: &Value) -> Result<Value, AppError>;
}
