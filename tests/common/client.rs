//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all analysis-server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

/// HTTP test client
pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    /// Creates a new client pointed at the given server
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// GET / - liveness message
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Home request failed")
    }

    /// GET /health - health check
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("Health request failed")
    }

    /// POST /api/analyze with the provider enabled
    pub async fn analyze(&self, text: &str) -> Response {
        self.analyze_with_flag(text, true).await
    }

    /// POST /api/analyze with an explicit use_gemini flag
    pub async fn analyze_with_flag(&self, text: &str, use_gemini: bool) -> Response {
        self.client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&json!({
                "text": text,
                "use_gemini": use_gemini,
            }))
            .send()
            .await
            .expect("Analyze request failed")
    }

    /// POST /api/analyze with an arbitrary JSON body
    ///
    /// Use this for malformed-request tests.
    pub async fn analyze_raw(&self, body: serde_json::Value) -> Response {
        self.client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Analyze request failed")
    }

    /// GET /api/logs with an explicit count
    pub async fn get_logs(&self, count: usize) -> Response {
        self.client
            .get(format!("{}/api/logs", self.base_url))
            .query(&[("count", count)])
            .send()
            .await
            .expect("Get logs request failed")
    }

    /// GET /api/logs without a count parameter (server defaults to 10)
    pub async fn get_logs_default(&self) -> Response {
        self.client
            .get(format!("{}/api/logs", self.base_url))
            .send()
            .await
            .expect("Get logs request failed")
    }

    /// DELETE /api/logs
    pub async fn clear_logs(&self) -> Response {
        self.client
            .delete(format!("{}/api/logs", self.base_url))
            .send()
            .await
            .expect("Clear logs request failed")
    }
}
