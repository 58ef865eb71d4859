//! Authentication module for the iiko.biz API
//!
//! The token endpoint issues a bearer-style access token for a fixed
//! 15 minute window. [`BizAuth`] caches the token together with its issue
//! time and re-acquires it lazily, on the calling task, before a request
//! whenever the cached token has aged out. There is no background timer.

use crate::config::Config;
use crate::constants::{TOKEN_VALIDITY_MINUTES, USER_AGENT};
use crate::error::AppError;
use chrono::{DateTime, Duration, Utc};
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

const TOKEN_ENDPOINT: &str = "api/0/auth/access_token";
const ECHO_ENDPOINT: &str = "api/0/auth/echo";
const USER_TOKEN_ENDPOINT: &str = "api/0/auth/biz_access_token";
const USER_INFO_ENDPOINT: &str = "applicationMarket/userInfo";

/// A cached access token together with its issue time
///
/// The token is valid for exactly [`TOKEN_VALIDITY_MINUTES`] from issuance
/// and is replaced, never merged, on refresh.
#[derive(Debug, Clone)]
pub struct AccessToken {
    /// The raw token value, without the quotes the wire format carries
    pub value: String,
    /// When this token was obtained
    pub issued_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token issued now
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            issued_at: Utc::now(),
        }
    }

    /// Creates a token with an explicit issue time
    pub fn issued(value: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            issued_at,
        }
    }

    /// Age of this token relative to now
    pub fn age(&self) -> Duration {
        Utc::now() - self.issued_at
    }

    /// Whether the validity window has elapsed
    ///
    /// A token aged exactly 15 minutes counts as expired.
    pub fn is_expired(&self) -> bool {
        self.age() >= Duration::minutes(TOKEN_VALIDITY_MINUTES)
    }
}

/// Authentication manager for the iiko.biz API
///
/// Owns the credentials and the cached token. The token lives behind a
/// `tokio::sync::RwLock` so that a client shared across tasks performs at
/// most one refresh at a time; concurrent refreshes would be harmless to
/// the server (each yields an equally valid token) but redundant.
pub struct BizAuth {
    config: Arc<Config>,
    http: Client,
    token: RwLock<Option<AccessToken>>,
}

impl BizAuth {
    /// Creates a new authentication manager
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Arc<Config>) -> Self {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(config.rest_api.timeout))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config,
            http,
            token: RwLock::new(None),
        }
    }

    /// Joins the configured base URL with a path
    fn rest_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Ensures the cached token is inside its validity window, acquiring a
    /// fresh one when it is absent or aged out.
    ///
    /// Must be called before every authenticated request; the transport does
    /// this for all service methods.
    ///
    /// # Returns
    /// * `Ok(true)` - A refresh was performed
    /// * `Ok(false)` - The cached token was still valid
    /// * `Err(AppError::Token)` - The token endpoint failed
    pub async fn ensure_fresh(&self) -> Result<bool, AppError> {
        {
            let token = self.token.read().await;
            if let Some(tok) = token.as_ref()
                && !tok.is_expired()
            {
                return Ok(false);
            }
        }

        let mut token = self.token.write().await;
        // Another task may have refreshed while we waited for the write lock
        if let Some(tok) = token.as_ref()
            && !tok.is_expired()
        {
            return Ok(false);
        }

        let fresh = self.fetch_token().await?;
        info!("Access token refreshed");
        *token = Some(fresh);
        Ok(true)
    }

    /// Unconditionally acquires a new token from the token endpoint and
    /// replaces the cached one.
    ///
    /// # Returns
    /// * `Ok(String)` - The new token value
    /// * `Err(AppError::Token)` - The token endpoint failed
    pub async fn refresh(&self) -> Result<String, AppError> {
        let fresh = self.fetch_token().await?;
        let value = fresh.value.clone();
        let mut token = self.token.write().await;
        *token = Some(fresh);
        Ok(value)
    }

    /// Returns a valid token value, refreshing first when needed
    pub async fn access_token(&self) -> Result<String, AppError> {
        self.ensure_fresh().await?;
        let token = self.token.read().await;
        token
            .as_ref()
            .map(|tok| tok.value.clone())
            .ok_or_else(|| AppError::Token(String::from("no token after refresh")))
    }

    /// Returns a copy of the cached token, if any
    pub async fn current(&self) -> Option<AccessToken> {
        self.token.read().await.clone()
    }

    /// Replaces the cached token with one obtained elsewhere.
    ///
    /// Useful for handing a token between client instances and for tests
    /// that need to control the issue time.
    pub async fn store_token(&self, token: AccessToken) {
        let mut current = self.token.write().await;
        *current = Some(token);
    }

    /// Performs the actual token request
    async fn fetch_token(&self) -> Result<AccessToken, AppError> {
        let url = self.rest_url(TOKEN_ENDPOINT);
        debug!("GET {}", TOKEN_ENDPOINT);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("user_id", self.config.credentials.login.as_str()),
                ("user_secret", self.config.credentials.password.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach token endpoint: {}", e);
                AppError::Token(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token request failed with status {}: {}", status, body);
            return Err(AppError::Token(format!("status {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Token(e.to_string()))?;
        let value = strip_quotes(&body);
        if value.is_empty() {
            return Err(AppError::Token(String::from("empty token in response")));
        }

        debug!("Obtained access token of length: {}", value.len());
        Ok(AccessToken::new(value))
    }

    /// Probes the current token against the echo endpoint.
    ///
    /// The server echoes `msg` back when the token is accepted; on any other
    /// body the token is re-acquired. Returns the echoed text.
    pub async fn echo(&self, msg: &str) -> Result<String, AppError> {
        if msg.is_empty() {
            return Err(AppError::missing(ECHO_ENDPOINT, "msg"));
        }

        let token = self.access_token().await?;
        let url = self.rest_url(ECHO_ENDPOINT);
        debug!("GET {}", ECHO_ENDPOINT);

        let response = self
            .http
            .get(&url)
            .query(&[("msg", msg), ("access_token", token.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Token(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Token(e.to_string()))?;

        if body != msg {
            info!("Echo mismatch, re-acquiring access token");
            self.refresh().await?;
        }
        Ok(body)
    }

    /// Obtains an access token for a biz user by external application key.
    ///
    /// The user token is returned to the caller and not cached; it scopes
    /// calls made on behalf of that user, such as [`BizAuth::user_info`].
    pub async fn biz_access_token(&self, user_ext_id: &str) -> Result<String, AppError> {
        if user_ext_id.is_empty() {
            return Err(AppError::missing(USER_TOKEN_ENDPOINT, "user_ext_id"));
        }

        let url = self.rest_url(USER_TOKEN_ENDPOINT);
        debug!("GET {}", USER_TOKEN_ENDPOINT);

        let response = self
            .http
            .get(&url)
            .query(&[("user_ext_id", user_ext_id)])
            .send()
            .await
            .map_err(|e| AppError::Token(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("User token request failed with status {}: {}", status, body);
            return Err(AppError::Token(format!("status {status}: {body}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Token(e.to_string()))?;
        Ok(strip_quotes(&body))
    }

    /// Fetches information about a biz user visible to this API login
    ///
    /// # Arguments
    /// * `biz_token` - User token obtained from [`BizAuth::biz_access_token`]
    pub async fn user_info(&self, biz_token: &str) -> Result<Value, AppError> {
        if biz_token.is_empty() {
            return Err(AppError::missing(USER_INFO_ENDPOINT, "biz_access_token"));
        }

        let token = self.access_token().await?;
        let url = self.rest_url(USER_INFO_ENDPOINT);
        debug!("GET {}", USER_INFO_ENDPOINT);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("api_access_token", token.as_str()),
                ("biz_access_token", biz_token),
            ])
            .send()
            .await
            .map_err(|e| AppError::get(USER_INFO_ENDPOINT, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::get(
                USER_INFO_ENDPOINT,
                format!("status {status}: {body}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::get(USER_INFO_ENDPOINT, e.to_string()))
    }
}

/// Strips the surrounding quotes the token endpoints wrap their payload in
fn strip_quotes(body: &str) -> String {
    body.trim().trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_quotes_removes_wire_quoting() {
        assert_eq!(strip_quotes("\"abc123\""), "abc123");
        assert_eq!(strip_quotes(" \"abc123\"\n"), "abc123");
        assert_eq!(strip_quotes("abc123"), "abc123");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn access_token_expiry_boundary() {
        let fresh = AccessToken::new("tok");
        assert!(!fresh.is_expired(), "Fresh token should not be expired");

        // One second short of the window
        let almost = AccessToken::issued(
            "tok",
            Utc::now() - Duration::minutes(TOKEN_VALIDITY_MINUTES) + Duration::seconds(1),
        );
        assert!(
            !almost.is_expired(),
            "Token at 14m59s should still be valid"
        );

        // One second past the window
        let stale = AccessToken::issued(
            "tok",
            Utc::now() - Duration::minutes(TOKEN_VALIDITY_MINUTES) - Duration::seconds(1),
        );
        assert!(stale.is_expired(), "Token at 15m01s should be expired");
    }
}
