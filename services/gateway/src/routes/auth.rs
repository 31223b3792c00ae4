//! Login, callback, logout and home routes

use axum::{
    Form, Json,
    extract::{Query, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use crate::{
    AppState,
    config::GatewayConfig,
    error::{ApiError, NOT_LOGGED_IN},
    session::UserSession,
};

/// Placeholder shown instead of the raw session cookie outside development
pub const HIDDEN_COOKIE: &str = "[hidden]";

/// Parameters the provider sends to the callback, by query string or form post
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Absolute URL of `path` as seen by the browser
pub fn external_url(config: &GatewayConfig, headers: &HeaderMap, path: &str) -> String {
    if let Some(base) = config.public_url.as_deref() {
        return format!("{}{}", base.trim_end_matches('/'), path);
    }

    let host = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}{}", scheme, host, path)
}

/// Redirect to the provider's authorization endpoint
pub async fn login(
    State(state): State<AppState>,
    session: UserSession,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let redirect_uri = external_url(&state.config, &headers, "/callback");
    let request = state.oidc.authorization_request(&redirect_uri).await?;

    session.store_pending_login(&request.pending).await?;

    info!("Redirecting to the identity provider");
    Ok(Redirect::to(request.url.as_str()))
}

/// Provider callback delivered as a query string
pub async fn callback(
    State(state): State<AppState>,
    session: UserSession,
    WithRejection(Query(params), _): WithRejection<Query<CallbackParams>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    complete_login(&state, &session, params).await
}

/// Provider callback delivered as a form post
pub async fn callback_form(
    State(state): State<AppState>,
    session: UserSession,
    WithRejection(Form(params), _): WithRejection<Form<CallbackParams>, ApiError>,
) -> Result<impl IntoResponse, ApiError> {
    complete_login(&state, &session, params).await
}

async fn complete_login(
    state: &AppState,
    session: &UserSession,
    params: CallbackParams,
) -> Result<Redirect, ApiError> {
    let pending = session
        .take_pending_login()
        .await?
        .ok_or_else(|| ApiError::BadRequest("No login in progress".to_string()))?;

    if let Some(error) = params.error {
        warn!("Identity provider rejected the login: {}", error);
        return Err(ApiError::BadRequest(format!(
            "Login rejected by the identity provider: {}",
            params.error_description.unwrap_or(error)
        )));
    }

    if params.state.as_deref() != Some(pending.csrf_state.as_str()) {
        warn!("Login callback state does not match the login attempt");
        return Err(ApiError::BadRequest("Invalid login state".to_string()));
    }

    if pending.is_expired() {
        return Err(ApiError::BadRequest("Login attempt expired".to_string()));
    }

    let code = params
        .code
        .ok_or_else(|| ApiError::BadRequest("Missing authorization code".to_string()))?;

    let user = state.oidc.complete_login(code, &pending).await?;
    session.store_user(&user).await?;

    Ok(Redirect::to("/"))
}

/// Clear the session and log out of the provider
pub async fn logout(
    State(state): State<AppState>,
    session: UserSession,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    session.destroy().await?;

    let return_to = external_url(&state.config, &headers, "/");
    let url = state.oidc.logout_url(&return_to)?;

    Ok(Redirect::to(url.as_str()))
}

/// Current user's claims, or a prompt to log in
pub async fn home(
    State(state): State<AppState>,
    session: UserSession,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError> {
    let Some(user) = session.current_user().await? else {
        return Ok(Json(json!({
            "message": NOT_LOGGED_IN,
            "login": "/login",
        })));
    };

    let session_cookie = if state.config.dev_env {
        headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string()
    } else {
        HIDDEN_COOKIE.to_string()
    };

    Ok(Json(json!({
        "message": user.userinfo,
        "session_cookie": session_cookie,
    })))
}
