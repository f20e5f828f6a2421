//! Shared helpers for driving the AnimalDex router in-process
//!
//! Requests go through [`tower::ServiceExt::oneshot`], so no socket is bound.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use animaldex_server::{api, config::Config, db};

/// Nothing listens on port 1, so every query against this pool fails
pub const UNREACHABLE_DATABASE_URL: &str = "postgres://animaldex@127.0.0.1:1/animaldex";

/// Pool that never connects successfully
///
/// Requests rejected during validation must still succeed against it, which
/// proves they never reached the database.
pub fn unreachable_pool() -> PgPool {
    let mut config = Config::default();
    config.database.url = UNREACHABLE_DATABASE_URL.to_string();
    config.database.min_connections = 0;
    config.database.connect_timeout_secs = 1;
    db::create_lazy_pool(&config.database).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub async fn send(pool: PgPool, request: Request<Body>) -> TestResponse {
    let app = api::create_app(pool, &Config::default());
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    TestResponse { status, body }
}

pub async fn get(pool: PgPool, uri: &str) -> TestResponse {
    send(
        pool,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

pub async fn post_json(pool: PgPool, uri: &str, body: &Value) -> TestResponse {
    send_json(pool, Method::POST, uri, body.to_string()).await
}

pub async fn send_json(pool: PgPool, method: Method, uri: &str, body: String) -> TestResponse {
    send(
        pool,
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
}

/// Assert the error envelope and return its code
pub fn error_code(response: &TestResponse) -> &str {
    assert_eq!(response.body["success"], Value::Bool(false), "{}", response.body);
    assert!(response.body["error"]["message"].is_string(), "{}", response.body);
    response.body["error"]["code"].as_str().unwrap()
}
