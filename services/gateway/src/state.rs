//! Application state shared across handlers

use std::sync::Arc;

use anyhow::Result;
use common::{graphql::GraphQLClient, upstream::build_client};

use crate::{
    config::GatewayConfig,
    oidc::{DEFAULT_SCOPES, OidcClient, OidcConfig},
    repositories::{ArticleRepository, CommentRepository, SearchRepository},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub oidc: OidcClient,
    pub article_repository: ArticleRepository,
    pub comment_repository: CommentRepository,
    pub search_repository: SearchRepository,
}

impl AppState {
    /// Build the clients for every upstream from the configuration
    pub fn from_config(config: GatewayConfig) -> Result<Self> {
        let http = build_client(&config.upstream())?;

        let forum = GraphQLClient::new(http.clone(), &config.forum_api_url)?;
        let search_repository = SearchRepository::new(http.clone(), &config.search_api_url)?;

        let oidc = OidcClient::new(
            OidcConfig {
                base_url: config.auth0_base_url(),
                client_id: config.auth0_client_id.clone(),
                client_secret: config.auth0_client_secret.clone(),
                scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            },
            http,
        );

        Ok(Self {
            config: Arc::new(config),
            oidc,
            article_repository: ArticleRepository::new(forum.clone()),
            comment_repository: CommentRepository::new(forum),
            search_repository,
        })
    }
}
