use crate::application::services::ReportService;
use crate::config::Config;
use crate::error::AppError;
use crate::model::requests::{EventsRequest, OlapReportRequest, OlapReportType};
use crate::transport::http_client::BizHttpClient;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

const OLAP_COLUMNS: &str = "api/0/olaps/olapColumns";
const OLAP: &str = "api/0/olaps/olap";
const OLAP_PRESETS: &str = "api/0/olaps/olapPresets";
const OLAP_BY_PRESET: &str = "api/0/olaps/olapByPreset";
const EVENTS: &str = "api/0/events/events";
const EVENTS_METADATA: &str = "api/0/events/eventsMetadata";
const SESSIONS: &str = "api/0/events/sessions";
const NOTICES: &str = "api/0/notices/notices";

/// Implementation of the reports, events and notices service
pub struct ReportServiceImpl<T: BizHttpClient> {
    config: Arc<Config>,
    client: Arc<T>,
}

impl<T: BizHttpClient> ReportServiceImpl<T> {
    /// Creates a new instance of the report service
    pub fn new(config: Arc<Config>, client: Arc<T>) -> Self {
        Self { config, client }
    }

    /// These endpoints use `organizationId` as the tenant key, unlike the
    /// rest of the API
    fn org_query(&self) -> Vec<(String, String)> {
        vec![
            (
                String::from("organizationId"),
                self.config.credentials.organization.clone(),
            ),
            (
                String::from("request_timeout"),
                self.config.request_timeout.clone(),
            ),
        ]
    }

    fn timeout_query(&self) -> Vec<(String, String)> {
        vec![(
            String::from("request_timeout"),
            self.config.request_timeout.clone(),
        )]
    }
}

#[async_trait]
impl<T: BizHttpClient + 'static> ReportService for ReportServiceImpl<T> {
    async fn olap_columns(&self, report_type: OlapReportType) -> Result<Value, AppError> {
        let mut query = self.org_query();
        query.push((String::from("reportType"), report_type.to_string()));
        info!("Getting OLAP columns for report type: {}", report_type);

        self.client.get(OLAP_COLUMNS, &query).await
    }

    async fn olap(&self, request: &OlapReportRequest) -> Result<Value, AppError> {
        info!("Building OLAP report: {}", request.report_type);
        self.client
            .post(OLAP, &self.timeout_query(), request)
            .await
    }

    async fn olap_presets(&self) -> Result<Value, AppError> {
        info!("Getting OLAP report presets");
        self.client.get(OLAP_PRESETS, &self.org_query()).await
    }

    async fn olap_by_preset(&self, request: &Value) -> Result<Value, AppError> {
        info!("Building preconfigured OLAP report");
        self.client
            .post(OLAP_BY_PRESET, &self.org_query(), request)
            .await
    }

    async fn events(&self, request: &EventsRequest) -> Result<Value, AppError> {
        info!("Reading events journal");
        self.client
            .post(EVENTS, &self.timeout_query(), request)
            .await
    }

    async fn events_metadata(&self, request: &EventsRequest) -> Result<Value, AppError> {
        info!("Reading events journal metadata");
        self.client
            .post(EVENTS_METADATA, &self.timeout_query(), request)
            .await
    }

    async fn cash_sessions(&self, request: &EventsRequest) -> Result<Value, AppError> {
        info!("Reading cash register sessions");
        self.client
            .post(SESSIONS, &self.timeout_query(), request)
            .await
    }

    async fn notices(&self, request: &Value) -> Result<Value, AppError> {
        info!("Publishing notices");
        self.client
            .post(NOTICES, &self.timeout_query(), request)
            .await
    }
}
