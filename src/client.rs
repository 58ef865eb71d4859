//! High-level client for the iiko.biz API
//!
//! [`BizClient`] wires the configuration, the authentication manager and the
//! HTTP transport together and hands out one service per endpoint group.
//! Authentication is handled transparently: the access token is acquired on
//! first use and re-acquired before any request once its 15 minute validity
//! window has elapsed.
//!
//! # Example
//! ```ignore
//! use iiko_client::client::BizClient;
//! use iiko_client::config::Config;
//!
//! let client = BizClient::new(Config::new());
//! let couriers = client.settings().couriers().await?;
//! ```

use crate::application::services::geo_service::GeoServiceImpl;
use crate::application::services::loyalty_service::LoyaltyServiceImpl;
use crate::application::services::mobile_service::MobileServiceImpl;
use crate::application::services::order_service::OrderServiceImpl;
use crate::application::services::organization_service::OrganizationServiceImpl;
use crate::application::services::report_service::ReportServiceImpl;
use crate::application::services::settings_service::SettingsServiceImpl;
use crate::config::Config;
use crate::error::AppError;
use crate::session::auth::BizAuth;
use crate::transport::http_client::BizHttpClientImpl;
use std::sync::Arc;
use tracing::info;

/// Facade over the iiko.biz endpoint groups with automatic authentication
pub struct BizClient {
    config: Arc<Config>,
    auth: Arc<BizAuth>,
    http: Arc<BizHttpClientImpl>,
}

impl BizClient {
    /// Creates a new client without contacting the remote API.
    ///
    /// The first request acquires the access token.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let auth = Arc::new(BizAuth::new(config.clone()));
        let http = Arc::new(BizHttpClientImpl::with_auth(config.clone(), auth.clone()));

        Self { config, auth, http }
    }

    /// Creates a new client and performs the initial token acquisition
    ///
    /// # Returns
    /// * `Ok(BizClient)` - Authenticated client ready to use
    /// * `Err(AppError::Token)` - If the token endpoint fails
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config);
        client.auth.refresh().await?;
        info!("Connected to iiko.biz as: {}", client.config.credentials.login);
        Ok(client)
    }

    /// The authentication manager, for direct token operations
    /// (echo probe, user tokens)
    pub fn auth(&self) -> &Arc<BizAuth> {
        &self.auth
    }

    /// The underlying transport
    pub fn http(&self) -> &Arc<BizHttpClientImpl> {
        &self.http
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Organization endpoints
    pub fn organizations(&self) -> OrganizationServiceImpl<BizHttpClientImpl> {
        OrganizationServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// Order endpoints
    pub fn orders(&self) -> OrderServiceImpl<BizHttpClientImpl> {
        OrderServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// Loyalty and combo endpoints
    pub fn loyalty(&self) -> LoyaltyServiceImpl<BizHttpClientImpl> {
        LoyaltyServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// RMS and delivery settings endpoints
    pub fn settings(&self) -> SettingsServiceImpl<BizHttpClientImpl> {
        SettingsServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// Cities, streets and regions endpoints
    pub fn geo(&self) -> GeoServiceImpl<BizHttpClientImpl> {
        GeoServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// OLAP reports, events journal and notices endpoints
    pub fn reports(&self) -> ReportServiceImpl<BizHttpClientImpl> {
        ReportServiceImpl::new(self.config.clone(), self.http.clone())
    }

    /// Courier mobile application endpoints
    pub fn mobile(&self) -> MobileServiceImpl<BizHttpClientImpl> {
        MobileServiceImpl::new(self.config.clone(), self.http.clone())
    }
}

impl Default for BizClient {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
