//! Session management using signed cookies over an in-memory store
//!
//! The cookie only carries the signed session id; the token set and the
//! user's claims stay server-side. Handlers reach the session through the
//! [`UserSession`] extractor, never through global state.

use axum::{
    Router, async_trait,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use tower_sessions::{
    MemoryStore, Session, SessionManagerLayer,
    cookie::{Key, SameSite},
};
use tracing::info;

use crate::{
    config::GatewayConfig,
    error::ApiResult,
    models::{IdentityClaims, UserInfo},
    oidc::{OidcTokenResponse, PendingLogin},
};

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

const USER_KEY: &str = "user";
const PENDING_LOGIN_KEY: &str = "pending_login";

/// Authenticated user stored in the session after a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub token_set: OidcTokenResponse,
    pub userinfo: UserInfo,
}

impl SessionUser {
    /// Identity forwarded to the forum service
    pub fn identity(&self) -> IdentityClaims {
        IdentityClaims::from(&self.userinfo)
    }
}

/// Wrap the router with the session layer: in-memory store, signed
/// browser-session cookie keyed from `APP_SECRET_KEY`
pub fn with_sessions(router: Router, config: &GatewayConfig) -> Router {
    let key = Key::from(Sha512::digest(config.app_secret_key.as_bytes()).as_slice());

    let layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE)
        .with_secure(!config.dev_env)
        .with_same_site(SameSite::Lax)
        .with_signed(key);

    router.layer(layer)
}

/// Request-scoped accessor for the user's session
#[derive(Clone)]
pub struct UserSession {
    session: Session,
}

#[async_trait]
impl<S> FromRequestParts<S> for UserSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self { session })
    }
}

impl UserSession {
    /// The authenticated user, if any
    pub async fn current_user(&self) -> ApiResult<Option<SessionUser>> {
        Ok(self.session.get::<SessionUser>(USER_KEY).await?)
    }

    /// Store the authenticated user under a fresh session id
    pub async fn store_user(&self, user: &SessionUser) -> ApiResult<()> {
        info!("Creating session for user: {}", user.userinfo.sub);

        self.session.cycle_id().await?;
        self.session.insert(USER_KEY, user).await?;
        Ok(())
    }

    /// Remember the login handshake until the provider calls back
    pub async fn store_pending_login(&self, pending: &PendingLogin) -> ApiResult<()> {
        self.session.insert(PENDING_LOGIN_KEY, pending).await?;
        Ok(())
    }

    /// Take the login handshake out of the session; it is single-use
    pub async fn take_pending_login(&self) -> ApiResult<Option<PendingLogin>> {
        Ok(self.session.remove::<PendingLogin>(PENDING_LOGIN_KEY).await?)
    }

    /// Delete the session record and expire the cookie
    pub async fn destroy(&self) -> ApiResult<()> {
        info!("Deleting session");

        self.session.flush().await?;
        Ok(())
    }
}
