//! # iiko Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use iiko_client::prelude::*;
//!
//! let config = Config::with_credentials("login", "secret", "org-1");
//! let client = BizClient::new(config);
//! // ... etc
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the iiko.biz API client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// AUTHENTICATION AND TOKEN LIFECYCLE
// ============================================================================

/// Authentication manager and cached token
pub use crate::session::auth::{AccessToken, BizAuth};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::geo::GeoService;
pub use crate::application::interfaces::loyalty::LoyaltyService;
pub use crate::application::interfaces::mobile::MobileService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::organization::OrganizationService;
pub use crate::application::interfaces::report::ReportService;
pub use crate::application::interfaces::settings::SettingsService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

pub use crate::application::services::geo_service::GeoServiceImpl;
pub use crate::application::services::loyalty_service::LoyaltyServiceImpl;
pub use crate::application::services::mobile_service::MobileServiceImpl;
pub use crate::application::services::order_service::OrderServiceImpl;
pub use crate::application::services::organization_service::OrganizationServiceImpl;
pub use crate::application::services::report_service::ReportServiceImpl;
pub use crate::application::services::settings_service::SettingsServiceImpl;

// ============================================================================
// TRANSPORT AND HIGH-LEVEL CLIENT
// ============================================================================

/// HTTP client trait and implementation
pub use crate::transport::http_client::{BizHttpClient, BizHttpClientImpl};

/// High-level facade
pub use crate::client::BizClient;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    DeliveryOrdersFilter, EventsRequest, OlapReportRequest, OlapReportType,
    SetOrderDeliveredRequest,
};
pub use crate::model::responses::{
    CouriersResponse, DeliveryOrdersResponse, Employee, OrganizationInfo,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger initialization
pub use crate::utils::logger::setup_logger;
