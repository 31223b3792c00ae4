//! Backend-for-frontend gateway for the forum
//!
//! Delegates login to an OpenID Connect provider, proxies full-text search
//! to the search service and article/comment operations to the forum
//! GraphQL service.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod oidc;
pub mod queries;
pub mod repositories;
pub mod routes;
pub mod session;
pub mod state;

pub use state::AppState;
