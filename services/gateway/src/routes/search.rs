//! Full-text search route

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState,
    error::ApiError,
    models::search::{SearchFailure, SearchQuery},
    repositories::SearchOutcome,
};

/// Search the document corpus for `term`.
///
/// A non-200 answer from the search service is returned as a 200 payload
/// `{status_code, error}` for compatibility with existing clients.
pub async fn search(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<SearchQuery>, ApiError>,
) -> Result<Response, ApiError> {
    if query.term.trim().is_empty() {
        return Err(ApiError::BadRequest("term must not be empty".to_string()));
    }

    let response = match state.search_repository.search(&query.term).await? {
        SearchOutcome::Found(results) => Json(results).into_response(),
        SearchOutcome::Failed { status_code } => {
            Json(SearchFailure::new(status_code)).into_response()
        }
    };

    Ok(response)
}
