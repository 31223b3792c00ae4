//! Search service models

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body returned by the search service on success
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub data: SearchResults,
}

/// Matched excerpts keyed by page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub results: BTreeMap<String, PageExcerpt>,
    /// Any other key of `data`, passed through unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageExcerpt {
    /// Page metadata (title, chapter) under the labels the search service uses
    pub page_info: BTreeMap<String, Value>,
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload returned when the search service answers with a non-200 status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFailure {
    pub status_code: u16,
    pub error: &'static str,
}

impl SearchFailure {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            error: "error",
        }
    }
}

/// Query string of `GET /api/searcher`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchQuery {
    pub term: String,
}
