//! Common library for the forum gateway
//!
//! This crate provides the upstream plumbing shared by the gateway routes:
//! HTTP client construction with bounded timeouts, the GraphQL-over-HTTP
//! envelope and client, and the error type every upstream call reports.

pub mod error;
pub mod graphql;
pub mod upstream;

/// Example usage of the GraphQL client
///
/// ```rust,no_run
/// use common::graphql::{GraphQLClient, Variables};
/// use common::upstream::{UpstreamConfig, build_client};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let http = build_client(&UpstreamConfig::default())?;
///     let client = GraphQLClient::new(http, "http://localhost:8000/graphql")?;
///     let response = client
///         .execute::<serde_json::Value>("query { articles { title } }", &Variables::new())
///         .await?;
///     println!("{}", response.data);
///     Ok(())
/// }
/// ```
pub fn example_usage() {}
