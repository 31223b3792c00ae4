//! Search repository for the full-text search service

use tracing::{info, warn};
use url::Url;

use common::error::UpstreamResult;
use common::upstream::endpoint;

use crate::models::search::{SearchEnvelope, SearchResults};

/// What the search service answered
#[derive(Debug)]
pub enum SearchOutcome {
    /// HTTP 200 with decoded results
    Found(SearchResults),
    /// Any other status, passed back to the caller as a payload
    Failed { status_code: u16 },
}

/// Search repository for the full-text search service
#[derive(Clone)]
pub struct SearchRepository {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchRepository {
    /// Create a new search repository for the service at `base_url`
    pub fn new(http: reqwest::Client, base_url: &str) -> UpstreamResult<Self> {
        Ok(Self {
            http,
            endpoint: endpoint(base_url, "searcher")?,
        })
    }

    /// Run a full-text search; the term is sent percent-encoded as `query`
    pub async fn search(&self, term: &str) -> UpstreamResult<SearchOutcome> {
        info!("Searching for term: {}", term);

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("query", term)])
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            warn!("Search service responded with status {}", status);
            return Ok(SearchOutcome::Failed {
                status_code: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let envelope: SearchEnvelope = serde_json::from_slice(&body)?;

        Ok(SearchOutcome::Found(envelope.data))
    }
}
