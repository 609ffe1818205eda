//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mockable::DefaultClock;
use rstest::fixture;
use serde_json::Value;
use taskboard::{
    api::{AppState, router},
    task::{adapters::memory::InMemoryTaskRepository, services::TaskLifecycleService},
};
use tower::ServiceExt;

/// Lifecycle service over an in-memory repository.
pub type TestService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Provides a fresh service for each test.
#[fixture]
pub fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

/// Provides a router over a fresh in-memory repository.
#[fixture]
pub fn app(service: TestService) -> Router {
    router(AppState::new(service))
}

/// Sends one request through `app` and decodes the JSON reply.
///
/// # Errors
///
/// Returns an error if the request cannot be built or the body is not JSON.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> eyre::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))?,
        None => builder.body(Body::empty())?,
    };
    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };
    Ok((status, json))
}
