//! Comment routes proxied to the forum service

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
        comment::{AddCommentRequest, UpdateCommentRequest},
    },
};

/// Get all comments
pub async fn list_comments(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let comments = state.comment_repository.list().await?;
    Ok(Json(comments))
}

/// Get a comment by ID
pub async fn get_comment(
    State(state): State<AppState>,
    WithRejection(Path(comment_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = state.comment_repository.get_by_id(comment_id).await?;
    Ok(Json(comment))
}

/// Get the comments of a user
pub async fn get_comments_by_user(
    State(state): State<AppState>,
    WithRejection(Path(user_id), _): WithRejection<Path<String>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = state.comment_repository.get_by_user(&user_id).await?;
    Ok(Json(comments))
}

/// Get the comments of a period
pub async fn get_comments_by_period(
    State(state): State<AppState>,
    WithRejection(Query(period), _): WithRejection<Query<PeriodQuery>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    period.validate().map_err(ApiError::BadRequest)?;

    let comments = state.comment_repository.get_by_period(&period).await?;
    Ok(Json(comments))
}

/// Comment on an article, or reply to a comment, as the logged-in user
pub async fn add_comment(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Json(payload), _): WithRejection<Json<AddCommentRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let saved = state.comment_repository.add(&payload, &identity).await?;
    Ok(Json(saved))
}

/// Update a comment of the logged-in user
pub async fn update_comment(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Path(comment_id), _): WithRejection<Path<Uuid>, ApiError>,
    WithRejection(Json(payload), _): WithRejection<Json<UpdateCommentRequest>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let updated = state
        .comment_repository
        .update(comment_id, &payload, &identity)
        .await?;
    Ok(Json(updated))
}

/// Remove a comment of the logged-in user
pub async fn remove_comment(
    State(state): State<AppState>,
    Extension(identity): Extension<IdentityClaims>,
    WithRejection(Path(comment_id), _): WithRejection<Path<Uuid>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state.comment_repository.remove(comment_id, &identity).await?;
    Ok(Json(removed))
}
