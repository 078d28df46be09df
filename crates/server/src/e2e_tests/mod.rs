//! End-to-end tests driving the router over a fresh in-memory database.

mod heroes;
mod super_powers;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use crate::api;
use crate::app::App;
use crate::infrastructure::clock::FixedClock;
use crate::infrastructure::sqlite::{self, SqliteRepositories};

pub(crate) struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

pub(crate) struct TestApi {
    router: Router,
}

impl TestApi {
    /// Empty store, clock fixed at 2024-05-20.
    pub async fn empty() -> Self {
        Self::build(false).await
    }

    /// Store seeded with the default superpowers.
    pub async fn seeded() -> Self {
        Self::build(true).await
    }

    async fn build(seed: bool) -> Self {
        let pool = sqlite::test_pool().await;
        if seed {
            sqlite::seed_super_powers(&pool).await.unwrap();
        }
        let now = Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap();
        let app = App::new(SqliteRepositories::new(pool), Arc::new(FixedClock(now)));
        Self {
            router: api::router(Arc::new(app), None),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn call(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        self.send(request).await
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.call(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.call(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.call(Method::DELETE, uri, None).await
    }

    /// Create a superpower and return its id.
    pub async fn create_super_power(&self, name: &str, description: Option<&str>) -> i64 {
        let response = self
            .post(
                "/api/superpowers",
                serde_json::json!({ "name": name, "description": description }),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        response.json()["data"]["id"].as_i64().unwrap()
    }
}

/// Codes of every entry in a failure envelope.
pub(crate) fn error_codes(body: &Value) -> Vec<String> {
    body["error"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|error| error["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn health_reports_ok() {
    let api = TestApi::empty().await;

    let response = api.get("/api/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, b"OK");
}

#[tokio::test]
async fn every_response_carries_a_correlation_id() {
    let api = TestApi::empty().await;

    let response = api.get("/api/heroes").await;
    let header = response.headers.get("x-correlation-id").unwrap();
    assert_eq!(header.to_str().unwrap().len(), 36);

    let supplied = "0b6f2d1e-8c4a-4d3b-9e7f-1a2b3c4d5e6f";
    let request = Request::builder()
        .uri("/api/health")
        .header("x-correlation-id", supplied)
        .body(Body::empty())
        .unwrap();
    let response = api.send(request).await;
    assert_eq!(response.headers.get("x-correlation-id").unwrap(), supplied);
}

#[tokio::test]
async fn malformed_json_is_a_bad_request_envelope() {
    let api = TestApi::empty().await;
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/heroes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = api.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(error_codes(&body), vec!["BAD_REQUEST"]);
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request_envelope() {
    let api = TestApi::empty().await;

    let response = api.get("/api/heroes/abc").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(error_codes(&response.json()), vec!["BAD_REQUEST"]);
}
