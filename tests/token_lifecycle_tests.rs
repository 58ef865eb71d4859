//! Token lifecycle behavior against a mock server: lazy acquisition, reuse
//! inside the validity window, refresh once the window elapses.

use chrono::{Duration, Utc};
use iiko_client::config::Config;
use iiko_client::prelude::*;
use mockito::Matcher;
use std::sync::Arc;
use tokio_test::block_on;

const TOKEN_PATH: &str = "/api/0/auth/access_token";

fn test_config(base_url: &str) -> Arc<Config> {
    Arc::new(Config::with_base_url("login", "secret", "org-1", base_url))
}

#[tokio::test]
async fn first_request_acquires_token_lazily() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("user_id".into(), "login".into()),
            Matcher::UrlEncoded("user_secret".into(), "secret".into()),
        ]))
        .with_body("\"abc123\"")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);

    assert!(auth.current().await.is_none(), "No token before first use");

    let refreshed = auth.ensure_fresh().await.expect("token fetch");
    assert!(refreshed, "First ensure_fresh must refresh");
    assert_eq!(auth.access_token().await.expect("token"), "abc123");

    token_mock.assert_async().await;
}

#[tokio::test]
async fn token_is_reused_inside_validity_window() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"abc123\"")
        .expect(1)
        .create_async()
        .await;
    let list_mock = server
        .mock("GET", "/api/0/organization/list")
        .match_query(Matcher::UrlEncoded("access_token".into(), "abc123".into()))
        .with_body("[]")
        .expect(2)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = Arc::new(BizAuth::new(config.clone()));
    let http = Arc::new(BizHttpClientImpl::with_auth(config.clone(), auth));
    let orgs = OrganizationServiceImpl::new(config, http);

    // Two sequential calls inside the window carry the identical token and
    // hit the token endpoint exactly once
    orgs.list().await.expect("first call");
    orgs.list().await.expect("second call");

    token_mock.assert_async().await;
    list_mock.assert_async().await;
}

#[tokio::test]
async fn ensure_fresh_boundary_at_fifteen_minutes() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"renewed\"")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);

    // Aged 14m59s: still valid, no network call
    auth.store_token(AccessToken::issued(
        "old",
        Utc::now() - Duration::minutes(15) + Duration::seconds(1),
    ))
    .await;
    let refreshed = auth.ensure_fresh().await.expect("ensure_fresh");
    assert!(!refreshed, "Token at 14m59s must not be refreshed");
    assert_eq!(auth.current().await.expect("token").value, "old");

    // Aged 15m01s: exactly one refresh
    auth.store_token(AccessToken::issued(
        "old",
        Utc::now() - Duration::minutes(15) - Duration::seconds(1),
    ))
    .await;
    let refreshed = auth.ensure_fresh().await.expect("ensure_fresh");
    assert!(refreshed, "Token at 15m01s must be refreshed");
    assert_eq!(auth.current().await.expect("token").value, "renewed");

    token_mock.assert_async().await;
}

#[tokio::test]
async fn stale_token_is_replaced_and_new_value_sent() {
    let mut server = mockito::Server::new_async().await;

    // Phase 1: initial acquisition
    let first_token = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"abc123\"")
        .expect(1)
        .create_async()
        .await;
    let first_call = server
        .mock("GET", "/api/0/cities/cities")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_token".into(), "abc123".into()),
            Matcher::UrlEncoded("organization".into(), "org-1".into()),
        ]))
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = Arc::new(BizAuth::new(config.clone()));
    let http = Arc::new(BizHttpClientImpl::with_auth(config.clone(), auth.clone()));
    let geo = GeoServiceImpl::new(config, http);

    geo.cities().await.expect("first call");
    first_token.assert_async().await;
    first_call.assert_async().await;

    // Phase 2: age the cached token past the window; the next call must
    // fetch again and embed the new value. Later mocks take precedence.
    let second_token = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"def456\"")
        .expect(1)
        .create_async()
        .await;
    let second_call = server
        .mock("GET", "/api/0/cities/cities")
        .match_query(Matcher::UrlEncoded("access_token".into(), "def456".into()))
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    auth.store_token(AccessToken::issued(
        "abc123",
        Utc::now() - Duration::minutes(16),
    ))
    .await;

    geo.cities().await.expect("second call");
    second_token.assert_async().await;
    second_call.assert_async().await;
}

#[tokio::test]
async fn token_endpoint_failure_surfaces_as_token_error() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("Bad credentials")
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);

    match auth.ensure_fresh().await {
        Err(AppError::Token(msg)) => assert!(msg.contains("401")),
        other => panic!("Expected Token error, got {other:?}"),
    }
    token_mock.assert_async().await;
}

#[tokio::test]
async fn explicit_refresh_replaces_cached_token() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"fresh\"")
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);
    auth.store_token(AccessToken::new("stale")).await;

    let value = auth.refresh().await.expect("refresh");
    assert_eq!(value, "fresh");
    assert_eq!(auth.current().await.expect("token").value, "fresh");
}

#[tokio::test]
async fn echo_mismatch_reacquires_token() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"abc123\"")
        .expect(1)
        .create_async()
        .await;
    let echo_mock = server
        .mock("GET", "/api/0/auth/echo")
        .match_query(Matcher::UrlEncoded("msg".into(), "ping".into()))
        .with_body("something else")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);
    // Seed a valid token so only the mismatch triggers a fetch
    auth.store_token(AccessToken::new("abc123")).await;

    let echoed = auth.echo("ping").await.expect("echo");
    assert_eq!(echoed, "something else");

    token_mock.assert_async().await;
    echo_mock.assert_async().await;
}

#[tokio::test]
async fn echo_match_keeps_token() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .expect(0)
        .create_async()
        .await;
    server
        .mock("GET", "/api/0/auth/echo")
        .match_query(Matcher::UrlEncoded("msg".into(), "ping".into()))
        .with_body("ping")
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);
    auth.store_token(AccessToken::new("abc123")).await;

    let echoed = auth.echo("ping").await.expect("echo");
    assert_eq!(echoed, "ping");
    token_mock.assert_async().await;
}

#[tokio::test]
async fn biz_access_token_strips_quotes() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/0/auth/biz_access_token")
        .match_query(Matcher::UrlEncoded("user_ext_id".into(), "user-7".into()))
        .with_body("\"user-token\"")
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = BizAuth::new(config);

    let token = auth.biz_access_token("user-7").await.expect("user token");
    assert_eq!(token, "user-token");
}

#[test]
fn seeded_token_is_served_without_touching_the_network() {
    block_on(async {
        // Nothing listens on this port; a fresh seeded token must never
        // trigger a fetch
        let config = test_config("http://127.0.0.1:1");
        let auth = BizAuth::new(config);
        auth.store_token(AccessToken::new("seeded")).await;

        let refreshed = auth.ensure_fresh().await.expect("ensure_fresh");
        assert!(!refreshed, "Fresh seeded token must not be refreshed");
        assert_eq!(auth.access_token().await.expect("token"), "seeded");
    });
}

#[tokio::test]
async fn concurrent_ensure_fresh_refreshes_once() {
    let mut server = mockito::Server::new_async().await;
    let token_mock = server
        .mock("GET", TOKEN_PATH)
        .match_query(Matcher::Any)
        .with_body("\"abc123\"")
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server.url());
    let auth = Arc::new(BizAuth::new(config));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let auth = auth.clone();
        handles.push(tokio::spawn(async move { auth.ensure_fresh().await }));
    }

    let mut refreshes = 0;
    for handle in handles {
        if handle.await.expect("join").expect("ensure_fresh") {
            refreshes += 1;
        }
    }

    assert_eq!(refreshes, 1, "Exactly one task should perform the refresh");
    token_mock.assert_async().await;
}
