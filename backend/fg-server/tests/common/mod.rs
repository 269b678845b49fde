#![allow(dead_code)]

//! Test infrastructure for fg-server API tests

use fg_auth::{JwtValidator, LoginRateLimiter, RateLimitConfig, SessionIssuer};
use fg_core::{DESCRIPTOR_LEN, Descriptor, Identity, Matcher, NewIdentity, Profile};
use fg_db::IdentityRepository;
use fg_server::{AppState, Metrics, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    fg_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing with a generous login limit
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_limit(RateLimitConfig {
        max_requests: 10_000,
        window_secs: 1,
    })
    .await
}

pub async fn create_test_app_state_with_limit(limit: RateLimitConfig) -> AppState {
    AppState {
        pool: create_test_pool().await,
        matcher: Matcher::new(0.4),
        issuer: Arc::new(SessionIssuer::with_hs256(TEST_SECRET)),
        validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
        login_limiter: Arc::new(LoginRateLimiter::new(limit)),
        metrics: Metrics::new(),
    }
}

/// Descriptor of zeros with `value` in the first dimension
pub fn offset_descriptor(value: f64) -> Vec<f64> {
    let mut values = vec![0.0; DESCRIPTOR_LEN];
    values[0] = value;
    values
}

/// Insert an identity directly through the repository
pub async fn create_test_identity(
    state: &AppState,
    handle: &str,
    descriptor: Option<Vec<f64>>,
) -> Identity {
    let identity = Identity::new(NewIdentity {
        handle: handle.to_string(),
        email: format!("{}@example.com", handle),
        descriptor: descriptor.map(|values| Descriptor::new(values).unwrap()),
        profile: Profile {
            display_name: handle.to_string(),
            ..Default::default()
        },
    });
    IdentityRepository::new(state.pool.clone())
        .create(&identity)
        .await
        .expect("Failed to create test identity");
    identity
}

/// Issue a bearer token for an identity
pub fn token_for(state: &AppState, identity: &Identity) -> String {
    state.issuer.issue(identity).unwrap().token
}

/// Send a request through the router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Face signup body for `handle`
pub fn face_signup(handle: &str, descriptor: Vec<f64>) -> Value {
    json!({
        "handle": handle,
        "email": format!("{}@example.com", handle),
        "descriptor": descriptor,
    })
}
