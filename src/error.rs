//! Error types for the iiko.biz client
//!
//! Every failure surfaces immediately as an [`AppError`]; the library never
//! retries or falls back silently. Transport failures carry the logical
//! endpoint name and the HTTP verb so callers can tell which remote call
//! broke without parsing message strings.

use reqwest::Method;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The token endpoint was unreachable or rejected the credentials
    Token(String),
    /// A declared-required parameter was empty or absent; raised before any
    /// network call is attempted
    MissingParameter {
        /// Logical endpoint whose contract was violated
        endpoint: String,
        /// Name of the offending parameter
        parameter: String,
    },
    /// A GET or POST to an endpoint failed at the transport level or came
    /// back with a non-success status
    Request {
        /// Logical endpoint that was being called
        endpoint: String,
        /// HTTP verb used
        method: Method,
        /// Human-readable failure detail
        message: String,
    },
    /// The response body could not be decoded as the expected JSON shape
    Json(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Token(msg) => write!(f, "failed to acquire access token: {msg}"),
            AppError::MissingParameter {
                endpoint,
                parameter,
            } => {
                write!(
                    f,
                    "missing required parameter \"{parameter}\" for endpoint \"{endpoint}\""
                )
            }
            AppError::Request {
                endpoint,
                method,
                message,
            } => {
                write!(f, "{method} request to \"{endpoint}\" failed: {message}")
            }
            AppError::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl AppError {
    /// Builds a [`AppError::Request`] for a failed GET
    pub fn get(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Request {
            endpoint: endpoint.into(),
            method: Method::GET,
            message: message.into(),
        }
    }

    /// Builds a [`AppError::Request`] for a failed POST
    pub fn post(endpoint: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Request {
            endpoint: endpoint.into(),
            method: Method::POST,
            message: message.into(),
        }
    }

    /// Builds a [`AppError::MissingParameter`]
    pub fn missing(endpoint: impl Into<String>, parameter: impl Into<String>) -> Self {
        AppError::MissingParameter {
            endpoint: endpoint.into(),
            parameter: parameter.into(),
        }
    }
}
