//! HTTP client construction for upstream services

use std::time::Duration;

use tracing::info;
use url::Url;

use crate::error::UpstreamResult;

/// Configuration shared by every outbound HTTP call
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Total time allowed for a single upstream call
    pub timeout: Duration,
    /// Time allowed to establish the connection
    pub connect_timeout: Duration,
}

impl UpstreamConfig {
    /// Create a config with the given request timeout in seconds
    pub fn with_timeout_secs(secs: u64) -> Self {
        let timeout = Duration::from_secs(secs.max(1));
        Self {
            timeout,
            connect_timeout: timeout.min(Duration::from_secs(5)),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self::with_timeout_secs(10)
    }
}

/// Build the HTTP client used for upstream calls.
///
/// Redirects are not followed: upstreams are API services and a redirect
/// is treated as an unexpected status.
pub fn build_client(config: &UpstreamConfig) -> UpstreamResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .redirect(reqwest::redirect::Policy::none())
        .user_agent(concat!("forum-gateway/", env!("CARGO_PKG_VERSION")))
        .build()?;

    info!(
        "Upstream HTTP client initialized with a {}s timeout",
        config.timeout.as_secs()
    );
    Ok(client)
}

/// Append `path` to a base URL, keeping any path the base already has
pub fn endpoint(base: &str, path: &str) -> UpstreamResult<Url> {
    let url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&url)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("http://search:8000/api/", "/searcher").unwrap();
        assert_eq!(url.as_str(), "http://search:8000/api/searcher");

        let url = endpoint("http://search:8000", "searcher").unwrap();
        assert_eq!(url.as_str(), "http://search:8000/searcher");
    }

    #[test]
    fn test_endpoint_rejects_invalid_base() {
        assert!(endpoint("not a url", "searcher").is_err());
    }

    #[test]
    fn test_timeout_is_bounded() {
        let config = UpstreamConfig::with_timeout_secs(0);
        assert_eq!(config.timeout, Duration::from_secs(1));

        let config = UpstreamConfig::with_timeout_secs(30);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }
}
