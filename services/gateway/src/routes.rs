//! Gateway routes

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{AppState, config::GatewayConfig, middleware::require_session, session};

pub mod articles;
pub mod auth;
pub mod comments;
pub mod search;

/// Create the router for the gateway, without the outer layers
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route("/api/article", post(articles::add_article))
        .route(
            "/api/article/:article_id",
            put(articles::update_article).delete(articles::remove_article),
        )
        .route("/api/comment", post(comments::add_comment))
        .route(
            "/api/comment/:comment_id",
            put(comments::update_comment).delete(comments::remove_comment),
        )
        .route_layer(middleware::from_fn(require_session));

    Router::new()
        .route("/", get(auth::home))
        .route("/login", get(auth::login))
        .route("/callback", get(auth::callback).post(auth::callback_form))
        .route("/logout", get(auth::logout))
        .route("/health", get(health_check))
        .route("/api/searcher", get(search::search))
        .route("/api/articles", get(articles::list_articles))
        .route("/api/articles/id/:article_id", get(articles::get_article))
        .route("/api/articles/user/:user_id", get(articles::get_articles_by_user))
        .route("/api/articles/period", get(articles::get_articles_by_period))
        .route("/api/comments", get(comments::list_comments))
        .route("/api/comments/id/:comment_id", get(comments::get_comment))
        .route("/api/comments/user/:user_id", get(comments::get_comments_by_user))
        .route("/api/comments/period", get(comments::get_comments_by_period))
        .merge(protected_routes)
        .with_state(state)
}

/// Apply sessions, CORS and request tracing
pub fn apply_layers(router: Router, config: &GatewayConfig) -> Router {
    session::with_sessions(router, config)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The complete gateway application
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();
    apply_layers(create_router(state), &config)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "forum-gateway"
    }))
}
