//! Error types for upstream calls
//!
//! Every call the gateway makes to the search service, the forum service or
//! the identity provider reports failures through [`UpstreamError`].

use bytes::Bytes;
use thiserror::Error;

/// Custom error type for upstream operations
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The request never produced a response (connect failure, timeout, ...)
    #[error("Upstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a status the caller does not handle
    #[error("Upstream responded with status {status}")]
    Status { status: u16, body: Bytes },

    /// A payload could not be encoded or decoded
    #[error("Upstream payload error: {0}")]
    Json(#[from] serde_json::Error),

    /// The GraphQL envelope carried errors, top-level or in a result union.
    /// `body` is the envelope exactly as received.
    #[error("Upstream reported GraphQL errors")]
    GraphQL { body: Bytes },

    /// The GraphQL envelope had neither `data` nor `errors`
    #[error("Upstream GraphQL response carried no data")]
    MissingData,

    /// A configured upstream URL is not valid
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Type alias for Result with UpstreamError
pub type UpstreamResult<T> = Result<T, UpstreamError>;
