//! Adzuna REST client.
//!
//! A single dispatch path attaches credentials, merges caller parameters,
//! performs one GET, and maps non-2xx responses onto [`ClientError::ApiError`].
//! Responses are returned as raw JSON; the client never reshapes them.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::{AdzunaApiConfig, Credentials};
use crate::endpoints::{
    ApiRequest, CategoriesRequest, GeodataRequest, SalaryHistogramRequest, SalaryHistoryRequest,
    SearchJobsRequest, TopCompaniesRequest, VersionRequest,
};
use crate::error::{ClientError, ClientResult};
use crate::params::QueryParams;

/// Message used when an error body carries no `display` field.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// HTTP client for the Adzuna API.
///
/// Cheap to clone; clones share the underlying connection pool and credentials.
#[derive(Debug, Clone)]
pub struct AdzunaApiClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Arc<Credentials>,
}

impl AdzunaApiClient {
    /// Create a client from resolved configuration.
    pub fn new(config: AdzunaApiConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url,
            credentials: Arc::new(config.credentials),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_params(&self) -> QueryParams {
        QueryParams::new()
            .with("app_id", self.credentials.app_id())
            .with("app_key", self.credentials.app_key())
    }

    /// Perform `GET {base_url}/{path}` with credentials plus `extra`.
    ///
    /// Keys in `extra` override the credential keys on collision.
    pub async fn dispatch(&self, path: &str, extra: Option<&QueryParams>) -> ClientResult<Value> {
        let path = path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url, path);

        let mut query = self.auth_params();
        if let Some(extra) = extra {
            query = query.merged(extra);
        }

        debug!(path, param_count = query.len(), "Dispatching Adzuna API request");

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| ClientError::from_transport(path, e))?;

        let status = response.status();
        if !status.is_success() {
            // The status is authoritative; an unreadable body only loses the message.
            let body = response.bytes().await.unwrap_or_default();
            let message = display_message(&body);
            warn!(path, status = status.as_u16(), %message, "Adzuna API returned an error");
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(path, e))?;

        debug!(
            path,
            status = status.as_u16(),
            bytes = body.len(),
            "Adzuna API request succeeded"
        );
        Ok(serde_json::from_slice(&body)?)
    }

    /// Dispatch a typed endpoint request.
    pub async fn send<R: ApiRequest + ?Sized>(&self, request: &R) -> ClientResult<Value> {
        let query = request.query();
        let extra = (!query.is_empty()).then_some(&query);
        self.dispatch(&request.path(), extra).await
    }

    pub async fn search_jobs(&self, request: &SearchJobsRequest) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get_categories(&self, country: &str) -> ClientResult<Value> {
        self.send(&CategoriesRequest {
            country: country.to_string(),
        })
        .await
    }

    pub async fn get_salary_histogram(
        &self,
        request: &SalaryHistogramRequest,
    ) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get_top_companies(&self, request: &TopCompaniesRequest) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get_geodata(&self, request: &GeodataRequest) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get_salary_history(&self, request: &SalaryHistoryRequest) -> ClientResult<Value> {
        self.send(request).await
    }

    pub async fn get_api_version(&self) -> ClientResult<Value> {
        self.send(&VersionRequest).await
    }
}

/// Pull the human-readable `display` message out of an error body.
fn display_message(body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| v.get("display").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string())
}
