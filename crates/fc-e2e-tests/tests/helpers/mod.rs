//! Shared test harness for E2E integration tests.
//!
//! Drives the full Axum router (middleware included) through
//! `tower::ServiceExt::oneshot`, without binding a socket.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use fc_api::config::ApiConfig;
use fc_api::routes::build_router;
use fc_api::state::AppState;
use fc_protocol::FunctionCallResponse;

/// A captured HTTP response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

/// End-to-end test harness around the API router.
pub struct TestHarness {
    pub router: Router,
}

impl TestHarness {
    /// Harness with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            router: build_router(AppState::new(config)),
        }
    }

    /// Send a request with optional extra headers.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, &[]).await
    }

    /// Call `/execute` with `query` percent-encoded into `q`.
    pub async fn execute(&self, query: &str) -> FunctionCallResponse {
        let response = self.get(&format!("/execute?q={}", urlencoding::encode(query))).await;
        assert_eq!(response.status, StatusCode::OK, "execute {query:?}");
        serde_json::from_slice(&response.body).unwrap()
    }
}
