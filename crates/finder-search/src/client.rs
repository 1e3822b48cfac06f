//! HTTP client for the College Scorecard API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use finder_core::config::SearchConfig;
use finder_core::types::SchoolRecord;

use crate::error::SearchError;
use crate::query::SearchQuery;

/// Result of one search: the first page of schools and the API's total count.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<SchoolRecord>,
    pub total: u64,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// A backend able to answer school searches.
#[async_trait]
pub trait SchoolSearch: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError>;
}

#[derive(Debug, Deserialize)]
struct ScorecardResponse {
    #[serde(default)]
    metadata: Option<ScorecardMetadata>,
    results: Vec<SchoolRecord>,
}

#[derive(Debug, Deserialize)]
struct ScorecardMetadata {
    #[serde(default)]
    total: u64,
}

/// Parse a raw Scorecard response body.
pub fn parse_response(body: &str) -> Result<SearchOutcome, SearchError> {
    let response: ScorecardResponse = serde_json::from_str(body)?;
    let total = response
        .metadata
        .map(|m| m.total)
        .unwrap_or(response.results.len() as u64);
    Ok(SearchOutcome {
        results: response.results,
        total,
    })
}

/// [`SchoolSearch`] over HTTPS with a bounded per-request timeout.
pub struct ScorecardClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    per_page: usize,
    timeout: Duration,
}

impl ScorecardClient {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            per_page: config.per_page,
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    fn request_params(&self, query: &SearchQuery) -> Vec<(String, String)> {
        let mut params = vec![("api_key".to_string(), self.api_key.clone())];
        params.extend(query.to_params());
        params.push(("per_page".to_string(), self.per_page.to_string()));
        params
    }
}

#[async_trait]
impl SchoolSearch for ScorecardClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome, SearchError> {
        let params = self.request_params(query);
        debug!(filters = params.len(), "Sending school search");

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout(self.timeout.as_secs())
                } else {
                    SearchError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "School search rejected");
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;
        let outcome = parse_response(&body)?;
        debug!(
            returned = outcome.results.len(),
            total = outcome.total,
            "School search completed"
        );
        Ok(outcome)
    }
}
