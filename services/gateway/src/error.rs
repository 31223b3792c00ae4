//! Custom error types for the gateway

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, PathRejection, QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use common::error::UpstreamError;

use crate::oidc::OidcError;

/// Message returned when a mutating route is called without a session
pub const NOT_LOGGED_IN: &str = "User not logged in!";

/// Custom error type for the gateway
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed inbound request, rejected before any upstream call
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Mutating route called without a session
    #[error("{}", NOT_LOGGED_IN)]
    Unauthorized,

    /// Forum envelope carrying errors; the body is echoed verbatim
    #[error("Upstream GraphQL error")]
    UpstreamGraphQL(Bytes),

    /// Identity provider failure during login
    #[error("Identity provider error: {0}")]
    UpstreamAuth(#[from] OidcError),

    /// Upstream unreachable or answering with something undecodable
    #[error("Upstream error: {0}")]
    Upstream(UpstreamError),

    /// Session store failure
    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl From<UpstreamError> for ApiError {
    fn from(err: UpstreamError) -> Self {
        match err {
            UpstreamError::GraphQL { body } => ApiError::UpstreamGraphQL(body),
            other => ApiError::Upstream(other),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized => (StatusCode::FORBIDDEN, NOT_LOGGED_IN.to_string()),
            ApiError::UpstreamGraphQL(body) => {
                return (
                    StatusCode::BAD_REQUEST,
                    [(header::CONTENT_TYPE, "application/json")],
                    body,
                )
                    .into_response();
            }
            ApiError::UpstreamAuth(e) => {
                error!("Login with the identity provider failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Authentication with the identity provider failed".to_string(),
                )
            }
            ApiError::Upstream(e) => {
                error!("Upstream call failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    "Upstream service unavailable".to_string(),
                )
            }
            ApiError::Session(e) => {
                error!("Session store failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Type alias for gateway results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_graphql_error_body_is_verbatim() {
        let envelope = Bytes::from_static(br#"{"data":null,"errors":[{"message":"x"}]}"#);
        let response = ApiError::from(UpstreamError::GraphQL {
            body: envelope.clone(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(body, envelope);
    }

    #[tokio::test]
    async fn test_unauthorized_is_forbidden() {
        let response = ApiError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({"error": "User not logged in!"}));
    }

    #[test]
    fn test_transport_errors_are_not_graphql_errors() {
        let err = ApiError::from(UpstreamError::MissingData);
        assert!(matches!(err, ApiError::Upstream(_)));
    }
}
