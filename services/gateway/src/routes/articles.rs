//! Article routes proxied to the forum service

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

use crate::{
    AppState,
    error::ApiError,
    models::{
        IdentityClaims, PeriodQuery,
        article::{AddArticleRequest, UpdateArticleRequest},
    },
};

/// Get all articles
pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let articles = state.article_repository.list().await?;
    Ok(Json(articles))
}

/// Get an article by ID
pub async fn get_article(
    State(state): State<AppState>,
    WithRejection(Path(article_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let article = state.article_repository.get_by_id(article_id).await?;
    Ok(Json(article))
}

/// Get the articles of a user
pub async fn get_articles_by_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let articles = state.article_repository.get_by_user(&user_id).await?;
    Ok(Json(articles))
}

/// Get the articles of a period
pub async fn get_articles_by_period(
    State(state): State<AppState>,
    WithRejection(Query(period), _): WithRejection<Query<PeriodQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    period.validate().map_err(ApiError::BadRequest)?;

    let articles = state.article_repository.get_by_period(&period).await?;
    Ok(Json(articles))
}

/// Create an article as the logged-in user
pub async fn add_article(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Json(payload), _): WithRejection<Json<AddArticleRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.article_repository.add(&payload, &identity).await?;
    Ok(Json(created))
}

/// Update an article of the logged-in user
pub async fn update_article(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Path(article_id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateArticleRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state
        .article_repository
        .update(article_id, &payload, &identity)
        .await?;
    Ok(Json(updated))
}

/// Remove an article of the logged-in user
pub async fn remove_article(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Path(article_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state.article_repository.remove(article_id, &identity).await?;
    Ok(Json(removed))
}
