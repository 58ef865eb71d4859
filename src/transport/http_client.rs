//! HTTP transport for the iiko.biz API
//!
//! All service methods funnel through [`BizHttpClient::request`]: the token
//! is checked and refreshed when stale, the full URL is composed from the
//! base host, path and query, and the response body is decoded as JSON.
//! Transport failures and non-success statuses map to [`AppError::Request`]
//! carrying the logical endpoint and the verb; undecodable bodies map to
//! [`AppError::Json`].

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::auth::BizAuth;
use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// Transport seam used by all endpoint services
///
/// Implementations take care of authentication and URL composition; callers
/// only name the path relative to the base URL and the caller-side query
/// parameters (the access token is never part of `query`).
#[async_trait]
pub trait BizHttpClient: Send + Sync {
    /// Issues a request to `endpoint` and decodes the JSON response body
    async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned;

    /// Issues a POST to an endpoint whose documented return is a bare status
    /// indicator. The raw status is handed back as-is; only transport-level
    /// failures become errors.
    async fn request_status<B>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<StatusCode, AppError>
    where
        B: Serialize + Send + Sync;

    /// Makes a GET request
    async fn get<T>(&self, endpoint: &str, query: &[(String, String)]) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, endpoint, query, None)
            .await
    }

    /// Makes a POST request with a JSON body
    async fn post<B, T>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        body: &B,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, query, Some(body))
            .await
    }
}

/// reqwest-backed implementation of [`BizHttpClient`]
pub struct BizHttpClientImpl {
    config: Arc<Config>,
    auth: Arc<BizAuth>,
    http: Client,
}

impl BizHttpClientImpl {
    /// Creates a new transport with its own authentication manager
    pub fn new(config: Arc<Config>) -> Self {
        let auth = Arc::new(BizAuth::new(config.clone()));
        Self::with_auth(config, auth)
    }

    /// Creates a new transport sharing an existing authentication manager
    pub fn with_auth(config: Arc<Config>, auth: Arc<BizAuth>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, auth, http }
    }

    /// The authentication manager backing this transport
    pub fn auth(&self) -> &Arc<BizAuth> {
        &self.auth
    }

    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Ensures a fresh token, composes the URL and sends the request
    async fn send_internal<B: Serialize + Send + Sync>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let token = self.auth.access_token().await?;
        let url = self.rest_url(endpoint);

        debug!("{} {}", method, endpoint);

        let mut request = self
            .http
            .request(method.clone(), &url)
            .query(&[("access_token", token.as_str())])
            .query(query);

        if let Some(b) = body {
            request = request.json(b);
        }

        request.send().await.map_err(|e| {
            error!("{} {} failed: {}", method, endpoint, e);
            AppError::Request {
                endpoint: endpoint.to_string(),
                method,
                message: e.to_string(),
            }
        })
    }
}

#[async_trait]
impl BizHttpClient for BizHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Send + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .send_internal(method.clone(), endpoint, query, body)
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status {}: {}", status, body);
            return Err(AppError::Request {
                endpoint: endpoint.to_string(),
                method,
                message: format!("status {status}: {body}"),
            });
        }

        let body = response.text().await.map_err(|e| AppError::Request {
            endpoint: endpoint.to_string(),
            method,
            message: e.to_string(),
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to decode response from {}: {}", endpoint, e);
            AppError::Json(e)
        })
    }

    async fn request_status<B>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&B>,
    ) -> Result<StatusCode, AppError>
    where
        B: Serialize + Send + Sync,
    {
        let response = self
            .send_internal(Method::POST, endpoint, query, body)
            .await?;

        let status = response.status();
        debug!("Response status: {}", status);
        Ok(status)
    }
}
