//! # Backend API Transport
//!
//! POSTs drafts to the four creation endpoints and decodes whatever JSON comes
//! back. The response schema belongs to the backend; bodies are kept as opaque
//! [`serde_json::Value`]s.
//!
//! | Endpoint       | Path                           |
//! |----------------|--------------------------------|
//! | `Insights`     | `/api/analysis/insights`       |
//! | `Campaigns`    | `/api/marketing/campaigns`     |
//! | `Metrics`      | `/api/marketing/metrics`       |
//! | `Transactions` | `/api/accounting/transactions` |
//!
//! The same paths answer `GET` with the records created so far, optionally
//! narrowed by query filters ([`ListQuery`]).
//!
//! [`Transport`] is the seam the workflow talks to; [`ApiClient`] is the
//! reqwest implementation.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::errors::{ConfigError, SubmitError, SubmitResult};

/// Health check path (GET)
pub const HEALTH_PATH: &str = "/api/health";

/// A creation endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Insights,
    Campaigns,
    Metrics,
    Transactions,
}

impl Endpoint {
    /// Absolute request path
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Insights => "/api/analysis/insights",
            Endpoint::Campaigns => "/api/marketing/campaigns",
            Endpoint::Metrics => "/api/marketing/metrics",
            Endpoint::Transactions => "/api/accounting/transactions",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "POST {}", self.path())
    }
}

/// A serialized draft ready to send
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub body: Value,
}

impl ApiRequest {
    /// Serialize a draft as the request body.
    ///
    /// Encoding failures count as transport errors: nothing was sent.
    pub fn from_draft<T: Serialize + ?Sized>(endpoint: Endpoint, draft: &T) -> SubmitResult<Self> {
        let body = serde_json::to_value(draft)
            .map_err(|e| SubmitError::transport(format!("Could not encode request body: {}", e)))?;
        Ok(ApiRequest { endpoint, body })
    }
}

/// A response whose body decoded as JSON
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded body
    pub body: Value,
}

impl ApiResponse {
    /// Whether the status is 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A `GET` on a creation endpoint listing its records
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub endpoint: Endpoint,
    /// Query pairs in insertion order
    pub filters: Vec<(&'static str, String)>,
}

impl ListQuery {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, filters: Vec::new() }
    }

    /// Add a filter; empty values are skipped
    pub fn filter(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.filters.push((key, value));
        }
        self
    }
}

/// Sends one request and decodes the reply. Never retries.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> SubmitResult<ApiResponse>;

    async fn fetch(&self, query: ListQuery) -> SubmitResult<ApiResponse>;
}

/// HTTP client for the backend.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client from configuration.
    ///
    /// No request timeout is set: a submission runs until the server answers
    /// or the connection fails.
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ConfigError::HttpClient {
                reason: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a path against the base URL, keeping any base path prefix
    pub fn url_for(&self, path: &str) -> SubmitResult<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| SubmitError::transport(format!("Invalid URL for '{}': {}", path, e)))
    }

    /// POST a request body and decode the reply.
    ///
    /// Any status is accepted as long as the body is JSON.
    pub async fn post_json(&self, request: ApiRequest) -> SubmitResult<ApiResponse> {
        let url = self.url_for(request.endpoint.path())?;
        debug!(endpoint = %request.endpoint, %url, "sending request");

        let response = self
            .http
            .post(url)
            .json(&request.body)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %request.endpoint, error = %e, "request failed");
                SubmitError::transport(e)
            })?;

        decode(response).await
    }

    /// Full URL of a listing, filters appended as query pairs
    pub fn list_url(&self, query: &ListQuery) -> SubmitResult<Url> {
        let mut url = self.url_for(query.endpoint.path())?;
        if !query.filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &query.filters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET the records of an endpoint.
    ///
    /// Decoded like a submission reply: any status, JSON body required.
    pub async fn list(&self, query: ListQuery) -> SubmitResult<ApiResponse> {
        let url = self.list_url(&query)?;
        debug!(endpoint = %query.endpoint, %url, "listing records");

        let response = self.http.get(url).send().await.map_err(|e| {
            warn!(endpoint = %query.endpoint, error = %e, "listing failed");
            SubmitError::transport(e)
        })?;

        decode(response).await
    }

    /// Check `GET /api/health`.
    pub async fn health(&self) -> SubmitResult<ApiResponse> {
        let url = self.url_for(HEALTH_PATH)?;
        let response = self.http.get(url).send().await.map_err(SubmitError::transport)?;
        decode(response).await
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn send(&self, request: ApiRequest) -> SubmitResult<ApiResponse> {
        self.post_json(request).await
    }

    async fn fetch(&self, query: ListQuery) -> SubmitResult<ApiResponse> {
        self.list(query).await
    }
}

async fn decode(response: reqwest::Response) -> SubmitResult<ApiResponse> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(SubmitError::transport)?;
    let body: Value = serde_json::from_slice(&bytes).map_err(|e| {
        warn!(status, error = %e, "response body is not JSON");
        SubmitError::decode(e)
    })?;
    debug!(status, "response decoded");
    Ok(ApiResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::new(base).unwrap()).unwrap()
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Insights.path(), "/api/analysis/insights");
        assert_eq!(Endpoint::Campaigns.path(), "/api/marketing/campaigns");
        assert_eq!(Endpoint::Metrics.path(), "/api/marketing/metrics");
        assert_eq!(Endpoint::Transactions.path(), "/api/accounting/transactions");
        assert_eq!(Endpoint::Metrics.to_string(), "POST /api/marketing/metrics");
    }

    #[test]
    fn test_url_resolution_keeps_prefix() {
        let api = client("http://localhost:8000");
        assert_eq!(
            api.url_for(Endpoint::Insights.path()).unwrap().as_str(),
            "http://localhost:8000/api/analysis/insights"
        );

        let prefixed = client("https://example.com/backend");
        assert_eq!(
            prefixed.url_for(HEALTH_PATH).unwrap().as_str(),
            "https://example.com/backend/api/health"
        );
    }

    #[test]
    fn test_request_from_draft() {
        let request = ApiRequest::from_draft(Endpoint::Metrics, &json!({ "clicks": 3 })).unwrap();
        assert_eq!(request.endpoint, Endpoint::Metrics);
        assert_eq!(request.body, json!({ "clicks": 3 }));
    }

    #[test]
    fn test_list_url_appends_filters() {
        let api = client("http://localhost:8000");
        let query = ListQuery::new(Endpoint::Transactions)
            .filter("account", "bank")
            .filter("category", "")
            .filter("note", "a&b");
        assert_eq!(query.filters.len(), 2);
        assert_eq!(
            api.list_url(&query).unwrap().as_str(),
            "http://localhost:8000/api/accounting/transactions?account=bank&note=a%26b"
        );

        let bare = ListQuery::new(Endpoint::Insights);
        assert_eq!(
            api.list_url(&bare).unwrap().as_str(),
            "http://localhost:8000/api/analysis/insights"
        );
    }

    #[test]
    fn test_response_success_range() {
        let ok = ApiResponse { status: 201, body: Value::Null };
        let bad = ApiResponse { status: 422, body: Value::Null };
        assert!(ok.is_success());
        assert!(!bad.is_success());
    }
}
