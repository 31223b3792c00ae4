//! Gateway configuration loaded from the environment

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;

use common::upstream::UpstreamConfig;

/// Gateway configuration
///
/// # Environment Variables
/// - `APP_SECRET_KEY`: secret the session cookie signing key is derived from
/// - `AUTH0_DOMAIN`: identity provider domain (a full `http(s)://` URL is accepted too)
/// - `AUTH0_CLIENT_ID` / `AUTH0_CLIENT_SECRET`: OAuth2 client credentials
/// - `FORUM_API_URL`: GraphQL endpoint of the forum service
/// - `SEARCH_API_URL`: base URL of the search service
/// - `API_PORT`: listening port (default: 5000)
/// - `DEBUG`: verbose logging (default: false)
/// - `DEV_ENV`: expose the raw session cookie on `/`, allow non-secure cookies (default: false)
/// - `PUBLIC_URL`: external base URL used for the login callback and logout return
/// - `UPSTREAM_TIMEOUT_SECS`: timeout for every upstream call (default: 10)
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayConfig {
    pub app_secret_key: String,
    pub auth0_domain: String,
    pub auth0_client_id: String,
    pub auth0_client_secret: String,
    pub forum_api_url: String,
    pub search_api_url: String,
    pub api_port: u16,
    pub debug: bool,
    pub dev_env: bool,
    #[serde(default)]
    pub public_url: Option<String>,
    pub upstream_timeout_secs: u64,
}

impl GatewayConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    /// Load the configuration from an environment source
    pub fn from_environment(environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("api_port", 5000)?
            .set_default("debug", false)?
            .set_default("dev_env", false)?
            .set_default("upstream_timeout_secs", 10)?
            .add_source(environment)
            .build()?;

        let config: GatewayConfig = settings.try_deserialize()?;
        if config.app_secret_key.is_empty() {
            anyhow::bail!("APP_SECRET_KEY must not be empty");
        }

        Ok(config)
    }

    /// Base URL of the identity provider
    pub fn auth0_base_url(&self) -> String {
        let domain = self.auth0_domain.trim_end_matches('/');
        if domain.starts_with("http://") || domain.starts_with("https://") {
            domain.to_string()
        } else {
            format!("https://{}", domain)
        }
    }

    pub fn upstream(&self) -> UpstreamConfig {
        UpstreamConfig::with_timeout_secs(self.upstream_timeout_secs)
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.api_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(pairs: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::default().source(Some(map))
    }

    const REQUIRED: [(&str, &str); 6] = [
        ("APP_SECRET_KEY", "secret"),
        ("AUTH0_DOMAIN", "tenant.eu.auth0.com"),
        ("AUTH0_CLIENT_ID", "client"),
        ("AUTH0_CLIENT_SECRET", "shh"),
        ("FORUM_API_URL", "http://forum:8000/graphql"),
        ("SEARCH_API_URL", "http://searcher:8001"),
    ];

    #[test]
    fn test_config_defaults() {
        let config = GatewayConfig::from_environment(environment(&REQUIRED)).unwrap();

        assert_eq!(config.api_port, 5000);
        assert!(!config.debug);
        assert!(!config.dev_env);
        assert_eq!(config.upstream_timeout_secs, 10);
        assert_eq!(config.public_url, None);
        assert_eq!(config.auth0_base_url(), "https://tenant.eu.auth0.com");
    }

    #[test]
    fn test_config_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("API_PORT", "8080"),
            ("DEBUG", "True"),
            ("DEV_ENV", "true"),
            ("PUBLIC_URL", "https://forum.example.org"),
            ("UPSTREAM_TIMEOUT_SECS", "3"),
        ]);

        let config = GatewayConfig::from_environment(environment(&pairs)).unwrap();

        assert_eq!(config.api_port, 8080);
        assert!(config.debug);
        assert!(config.dev_env);
        assert_eq!(config.public_url.as_deref(), Some("https://forum.example.org"));
        assert_eq!(config.upstream().timeout.as_secs(), 3);
        assert_eq!(config.listen_addr().port(), 8080);
    }

    #[test]
    fn test_config_requires_upstreams() {
        let pairs: Vec<_> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != "FORUM_API_URL")
            .collect();

        assert!(GatewayConfig::from_environment(environment(&pairs)).is_err());
    }

    #[test]
    fn test_auth0_domain_with_scheme_is_kept() {
        let mut pairs = REQUIRED.to_vec();
        pairs[1] = ("AUTH0_DOMAIN", "http://127.0.0.1:9000/");

        let config = GatewayConfig::from_environment(environment(&pairs)).unwrap();
        assert_eq!(config.auth0_base_url(), "http://127.0.0.1:9000");
    }
}
