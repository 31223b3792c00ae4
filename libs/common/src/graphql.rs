//! GraphQL-over-HTTP client
//!
//! Operations are sent as a single `POST {query, variables}`. The response
//! envelope is checked for top-level `errors` before `data` is decoded, and
//! the raw body is kept so callers can hand it back verbatim.

use bytes::Bytes;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use tracing::{debug, warn};
use url::Url;

use crate::error::{UpstreamError, UpstreamResult};

/// Outbound GraphQL request body
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a, V> {
    pub query: &'a str,
    pub variables: &'a V,
}

/// Upstream GraphQL envelope. `data` and a non-empty `errors` may coexist.
#[derive(Debug, Deserialize)]
pub struct GraphQLEnvelope<T> {
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLEnvelope<T> {
    /// Whether the envelope reports at least one top-level error
    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

/// A single entry of the envelope's `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<PathSegment>>,
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
}

/// Position of an error in the query document
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

/// Element of an error path: a field name or a list index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(u64),
}

/// Result field typed as a GraphQL union where every error variant
/// carries an `errors` field and the success variant does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnionResult<T> {
    Failure { errors: Value },
    Success(T),
}

impl<T> UnionResult<T> {
    pub fn is_failure(&self) -> bool {
        matches!(self, UnionResult::Failure { .. })
    }

    pub fn success(self) -> Option<T> {
        match self {
            UnionResult::Success(value) => Some(value),
            UnionResult::Failure { .. } => None,
        }
    }
}

/// Decoded `data` together with the body it came from
#[derive(Debug)]
pub struct GraphQLResponse<T> {
    pub data: T,
    pub raw: Bytes,
}

impl<T> GraphQLResponse<T> {
    /// Fail with the raw envelope when the selected result union is an
    /// error variant, otherwise hand back the decoded data.
    pub fn reject_failures<U>(self, field: impl FnOnce(&T) -> &UnionResult<U>) -> UpstreamResult<T> {
        if field(&self.data).is_failure() {
            warn!("Upstream GraphQL result union returned an error variant");
            return Err(UpstreamError::GraphQL { body: self.raw });
        }
        Ok(self.data)
    }
}

/// Operation variables, a JSON object built from typed inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Variables(Map<String, Value>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a typed input that serializes to a JSON object
    pub fn from_input<T: Serialize>(input: &T) -> UpstreamResult<Self> {
        match serde_json::to_value(input)? {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Ok(Self::new()),
            _ => Err(UpstreamError::Json(serde::ser::Error::custom(
                "operation variables must serialize to a JSON object",
            ))),
        }
    }

    /// Set a single variable, replacing any previous value
    pub fn with(mut self, key: &str, value: impl Serialize) -> UpstreamResult<Self> {
        self.0.insert(key.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Merge every field of `overrides` in; on key collision `overrides` wins
    pub fn merge<T: Serialize>(mut self, overrides: &T) -> UpstreamResult<Self> {
        let Variables(fields) = Self::from_input(overrides)?;
        self.0.extend(fields);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

/// Client for a single GraphQL endpoint
#[derive(Clone)]
pub struct GraphQLClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQLClient {
    /// Create a new client posting to `endpoint`
    pub fn new(http: reqwest::Client, endpoint: &str) -> UpstreamResult<Self> {
        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// Execute an operation and decode its `data` as `T`.
    ///
    /// A non-empty top-level `errors` array yields [`UpstreamError::GraphQL`]
    /// carrying the body as received, even when `data` is also present.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: &Variables,
    ) -> UpstreamResult<GraphQLResponse<T>> {
        debug!("Posting GraphQL operation to {}", self.endpoint);

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&GraphQLRequest { query, variables })
            .send()
            .await?;

        let status = response.status();
        let raw = response.bytes().await?;

        let envelope: GraphQLEnvelope<Value> = match serde_json::from_slice(&raw) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(UpstreamError::Status {
                    status: status.as_u16(),
                    body: raw,
                });
            }
            Err(e) => return Err(UpstreamError::Json(e)),
        };

        if envelope.has_errors() {
            warn!("Upstream GraphQL envelope carried errors (status {})", status);
            return Err(UpstreamError::GraphQL { body: raw });
        }

        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body: raw,
            });
        }

        let data = envelope.data.ok_or(UpstreamError::MissingData)?;
        let data = serde_json::from_value(data)?;

        Ok(GraphQLResponse { data, raw })
    }
}
