//! Session guard for mutating forum routes

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

use crate::{error::ApiError, session::UserSession};

/// Reject the request with 403 unless a user is logged in; otherwise
/// expose their [`IdentityClaims`](crate::models::IdentityClaims) to the
/// handler through the request extensions.
pub async fn require_session(
    session: UserSession,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = session.current_user().await?.ok_or_else(|| {
        info!("Rejecting {} {} without a session", req.method(), req.uri().path());
        ApiError::Unauthorized
    })?;

    req.extensions_mut().insert(user.identity());

    Ok(next.run(req).await)
}
