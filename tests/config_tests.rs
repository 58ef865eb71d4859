//! Configuration construction tests.

use iiko_client::config::Config;
use iiko_client::constants::{
    DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_REST_TIMEOUT_SECS,
};
use iiko_client::utils::config::{get_env_or_default, get_env_or_none};

#[test]
fn with_credentials_keeps_default_base_url_and_timeouts() {
    let config = Config::with_credentials("login", "secret", "org-1");

    assert_eq!(config.credentials.login, "login");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.credentials.organization, "org-1");
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT_SECS);
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn with_base_url_overrides_only_the_base_url() {
    let config = Config::with_base_url("login", "secret", "org-1", "http://localhost:1234");

    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
    assert_eq!(config.rest_api.timeout, DEFAULT_REST_TIMEOUT_SECS);
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
}

#[test]
fn default_base_url_points_at_iiko_biz() {
    assert_eq!(DEFAULT_BASE_URL, "https://iiko.biz:9900");
}

#[test]
fn get_env_or_default_returns_default_when_unset() {
    // Var name chosen to never exist in a real environment
    let value: String =
        get_env_or_default("IIKO_CLIENT_TEST_UNSET_VAR_8271", String::from("fallback"));
    assert_eq!(value, "fallback");

    let number: u64 = get_env_or_default("IIKO_CLIENT_TEST_UNSET_VAR_8271", 42);
    assert_eq!(number, 42);
}

#[test]
fn get_env_or_none_returns_none_when_unset() {
    let value: Option<String> = get_env_or_none("IIKO_CLIENT_TEST_UNSET_VAR_8271");
    assert!(value.is_none());
}

#[test]
fn config_serializes_round_trip() {
    let config = Config::with_credentials("login", "secret", "org-1");
    let json = serde_json::to_string(&config).expect("serialize");
    let back: Config = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(back.credentials.organization, "org-1");
    assert_eq!(back.rest_api.base_url, config.rest_api.base_url);
}
