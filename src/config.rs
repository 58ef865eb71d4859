use crate::constants::{DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_REST_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::error;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the iiko.biz API
pub struct Credentials {
    /// API login (the `user_id` sent to the token endpoint)
    pub login: String,
    /// API secret (the `user_secret` sent to the token endpoint)
    pub password: String,
    /// Organization identifier scoping most endpoint queries
    pub organization: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the iiko.biz REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the iiko.biz API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Value sent as the `request_timeout` query parameter on the endpoints
    /// that accept it, in the remote `HH:MM:SS` notation
    pub request_timeout: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading `.env`
    /// first when present.
    ///
    /// Recognized variables: `IIKO_LOGIN`, `IIKO_PASSWORD`,
    /// `IIKO_ORGANIZATION`, `IIKO_REST_BASE_URL`, `IIKO_REST_TIMEOUT`,
    /// `IIKO_REQUEST_TIMEOUT`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login = get_env_or_default("IIKO_LOGIN", String::from("default_login"));
        let password = get_env_or_default("IIKO_PASSWORD", String::from("default_password"));
        let organization =
            get_env_or_default("IIKO_ORGANIZATION", String::from("default_organization"));

        if login == "default_login" {
            error!("IIKO_LOGIN not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("IIKO_PASSWORD not found in environment variables or .env file");
        }
        if organization == "default_organization" {
            error!("IIKO_ORGANIZATION not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                login,
                password,
                organization,
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("IIKO_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("IIKO_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            request_timeout: get_env_or_default(
                "IIKO_REQUEST_TIMEOUT",
                String::from(DEFAULT_REQUEST_TIMEOUT),
            ),
        }
    }

    /// Creates a configuration from explicit credentials, keeping the
    /// default base URL and timeouts. Intended for embedding applications
    /// that do not use environment variables.
    pub fn with_credentials(
        login: impl Into<String>,
        password: impl Into<String>,
        organization: impl Into<String>,
    ) -> Self {
        Self::with_base_url(login, password, organization, DEFAULT_BASE_URL)
    }

    /// Creates a configuration with explicit credentials and base URL.
    /// Tests point this at a local mock server.
    pub fn with_base_url(
        login: impl Into<String>,
        password: impl Into<String>,
        organization: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                login: login.into(),
                password: password.into(),
                organization: organization.into(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_REST_TIMEOUT_SECS,
            },
            request_timeout: String::from(DEFAULT_REQUEST_TIMEOUT),
        }
    }
}
