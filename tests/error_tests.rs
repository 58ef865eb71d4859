//! Error display and conversion tests.

use iiko_client::error::AppError;
use reqwest::Method;
use std::error::Error;

#[test]
fn token_error_display() {
    let error = AppError::Token("status 401: bad credentials".to_string());
    assert_eq!(
        error.to_string(),
        "failed to acquire access token: status 401: bad credentials"
    );
}

#[test]
fn missing_parameter_display_names_endpoint_and_parameter() {
    let error = AppError::missing("api/0/streets/streets", "city");
    assert_eq!(
        error.to_string(),
        "missing required parameter \"city\" for endpoint \"api/0/streets/streets\""
    );
}

#[test]
fn request_error_display_carries_verb() {
    let error = AppError::get("api/0/cities/cities", "connection refused");
    assert_eq!(
        error.to_string(),
        "GET request to \"api/0/cities/cities\" failed: connection refused"
    );

    let error = AppError::post("api/0/olaps/olap", "status 500: boom");
    assert_eq!(
        error.to_string(),
        "POST request to \"api/0/olaps/olap\" failed: status 500: boom"
    );
}

#[test]
fn request_ctors_set_the_method() {
    match AppError::get("e", "m") {
        AppError::Request { method, .. } => assert_eq!(method, Method::GET),
        other => panic!("Unexpected variant: {other:?}"),
    }
    match AppError::post("e", "m") {
        AppError::Request { method, .. } => assert_eq!(method, Method::POST),
        other => panic!("Unexpected variant: {other:?}"),
    }
}

#[test]
fn json_error_converts_and_exposes_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let error: AppError = json_err.into();

    assert!(error.to_string().starts_with("json error: "));
    assert!(error.source().is_some());
}

#[test]
fn non_json_variants_have_no_source() {
    assert!(AppError::Token("x".into()).source().is_none());
    assert!(AppError::missing("e", "p").source().is_none());
    assert!(AppError::get("e", "m").source().is_none());
}
