#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use journal_server::{api::app_router, build_state, config::Config};
use serde_json::Value;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

/// Router backed by a fresh database; keep the `TempDir` alive for the test.
pub async fn build_test_router() -> (Router, TempDir) {
    build_test_router_with(&[]).await
}

/// Same as [`build_test_router`], with extra configuration variables.
pub async fn build_test_router_with(vars: &[(&str, &str)]) -> (Router, TempDir) {
    let tmp = tempdir().unwrap();
    let db_path = tmp.path().join("test.db").to_string_lossy().to_string();
    let config = Config::from_lookup(|key| match key {
        "JOURNAL_DB_PATH" => Some(db_path.clone()),
        _ => vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string()),
    })
    .unwrap();
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

/// Sends a request and returns the status with the parsed JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
