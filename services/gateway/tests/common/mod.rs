//! Shared utilities for the gateway integration tests.

#![allow(dead_code)]

use axum::{
    Json, Router,
    body::{Body, Bytes, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
    routing::post,
};
use gateway::{
    AppState,
    config::GatewayConfig,
    routes,
    session::{SESSION_COOKIE, SessionUser, UserSession},
};
use serde_json::{Value, json};
use tower::ServiceExt;

pub const USER_SUB: &str = "auth0|5f7c8ec7c33c6c004bbafe82";
pub const USER_EMAIL: &str = "ana@example.org";
pub const USER_NICKNAME: &str = "ana";

/// Gateway configuration pointing at the given upstreams
pub fn test_config(forum_url: &str, search_url: &str, auth0_domain: &str) -> GatewayConfig {
    GatewayConfig {
        app_secret_key: "integration-test-secret".to_string(),
        auth0_domain: auth0_domain.to_string(),
        auth0_client_id: "test-client".to_string(),
        auth0_client_secret: "test-client-secret".to_string(),
        forum_api_url: forum_url.to_string(),
        search_api_url: search_url.to_string(),
        api_port: 5000,
        debug: false,
        dev_env: false,
        public_url: None,
        upstream_timeout_secs: 5,
    }
}

/// Build the full application plus a route that seeds a logged-in session
pub fn build_app(config: GatewayConfig) -> Router {
    let state = AppState::from_config(config.clone()).expect("failed to build state");
    let router = routes::create_router(state).route("/test/session", post(seed_session));
    routes::apply_layers(router, &config)
}

async fn seed_session(session: UserSession, Json(user): Json<SessionUser>) -> StatusCode {
    match session.store_user(&user).await {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn default_userinfo() -> Value {
    json!({
        "sub": USER_SUB,
        "email": USER_EMAIL,
        "nickname": USER_NICKNAME,
        "name": "Ana Souza"
    })
}

/// Seed a session for `userinfo` and return the cookie to send back
pub async fn login_as(app: &Router, userinfo: Value) -> String {
    let body = json!({
        "token_set": {"access_token": "test-access-token", "token_type": "Bearer"},
        "userinfo": userinfo
    });
    let request = Request::post("/test/session")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    response.cookie().expect("session cookie was not set")
}

/// Collected response of a single request
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    /// The `session=...` pair of the Set-Cookie header, if any
    pub fn cookie(&self) -> Option<String> {
        let prefix = format!("{}=", SESSION_COOKIE);
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&prefix))
            .and_then(|value| value.split(';').next())
            .map(str::to_string)
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|value| value.to_str().ok())
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request("GET", uri, cookie, None)
}

pub fn request(method: &str, uri: &str, cookie: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Form-encoded POST, as an identity provider's `form_post` response mode sends it
pub fn form_post(uri: &str, cookie: Option<&str>, form: &str) -> Request<Body> {
    let mut builder = Request::post(uri).header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::from(form.to_string())).unwrap()
}
