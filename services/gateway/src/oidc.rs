//! OpenID Connect integration with the external identity provider
//!
//! Provider metadata is discovered lazily from
//! `{base}/.well-known/openid-configuration` on first use and shared by
//! every clone of the client. The authorization-code flow is protected by
//! a CSRF state, a PKCE verifier and a nonce checked against the ID token.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{DecodingKey, Validation, jwk::JwkSet};
use oauth2::{
    AuthUrl, AuthorizationCode, Client, ClientId, ClientSecret, CsrfToken, ExtraTokenFields,
    HttpRequest, HttpResponse, PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope,
    StandardRevocableToken, StandardTokenResponse, TokenResponse, TokenUrl,
    basic::{
        BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
        BasicTokenType,
    },
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::OnceCell;
use tracing::{debug, info};
use url::Url;

use crate::models::UserInfo;
use crate::session::SessionUser;

/// Scopes requested at login
pub const DEFAULT_SCOPES: [&str; 3] = ["openid", "profile", "email"];

/// A pending login is abandoned after this many seconds
pub const LOGIN_TTL_SECONDS: i64 = 600;

/// OIDC errors
#[derive(Error, Debug)]
pub enum OidcError {
    #[error("Provider discovery failed: {0}")]
    Discovery(String),

    #[error("Invalid provider URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Token exchange failed: {0}")]
    TokenExchange(String),

    #[error("ID token rejected: {0}")]
    IdToken(#[from] jsonwebtoken::errors::Error),

    #[error("Signing key '{0}' not found in provider key set")]
    UnknownKey(String),

    #[error("ID token nonce does not match the login attempt")]
    NonceMismatch,

    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned neither an ID token nor a userinfo endpoint")]
    MissingIdentity,
}

/// Extra token response fields returned by an OIDC provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl ExtraTokenFields for IdTokenFields {}

/// Token set returned by the provider's token endpoint
pub type OidcTokenResponse = StandardTokenResponse<IdTokenFields, BasicTokenType>;

type OidcOAuthClient = Client<
    BasicErrorResponse,
    OidcTokenResponse,
    BasicTokenType,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
>;

/// OIDC configuration for the provider
#[derive(Debug, Clone)]
pub struct OidcConfig {
    /// Provider base URL, e.g. `https://tenant.eu.auth0.com`
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub scopes: Vec<String>,
}

/// Subset of the provider metadata document the gateway needs
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderMetadata {
    pub issuer: String,
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    #[serde(default)]
    pub userinfo_endpoint: Option<String>,
    pub jwks_uri: String,
}

/// Login handshake kept in the session between `/login` and `/callback`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingLogin {
    pub csrf_state: String,
    pub pkce_verifier: String,
    pub nonce: String,
    pub redirect_uri: String,
    pub created_at: i64,
}

impl PendingLogin {
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() - self.created_at > LOGIN_TTL_SECONDS
    }
}

/// Authorization redirect and the handshake to remember for the callback
#[derive(Debug)]
pub struct AuthorizationRequest {
    pub url: Url,
    pub pending: PendingLogin,
}

#[derive(Debug, Deserialize)]
struct IdTokenClaims {
    #[serde(default)]
    nonce: Option<String>,
    #[serde(flatten)]
    userinfo: UserInfo,
}

/// OIDC client wrapper
#[derive(Clone)]
pub struct OidcClient {
    config: OidcConfig,
    http: reqwest::Client,
    metadata: Arc<OnceCell<ProviderMetadata>>,
}

impl OidcClient {
    /// Create a new client; nothing is fetched until the first login
    pub fn new(config: OidcConfig, http: reqwest::Client) -> Self {
        Self {
            config,
            http,
            metadata: Arc::new(OnceCell::new()),
        }
    }

    /// Provider metadata, discovered on first use
    pub async fn metadata(&self) -> Result<&ProviderMetadata, OidcError> {
        self.metadata.get_or_try_init(|| self.discover()).await
    }

    async fn discover(&self) -> Result<ProviderMetadata, OidcError> {
        let url = format!(
            "{}/.well-known/openid-configuration",
            self.config.base_url.trim_end_matches('/')
        );
        info!("Discovering identity provider metadata from {}", url);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(OidcError::Discovery(format!(
                "metadata endpoint responded with status {}",
                response.status()
            )));
        }

        response
            .json::<ProviderMetadata>()
            .await
            .map_err(|e| OidcError::Discovery(e.to_string()))
    }

    fn oauth_client(
        &self,
        metadata: &ProviderMetadata,
        redirect_uri: &str,
    ) -> Result<OidcOAuthClient, OidcError> {
        let client = OidcOAuthClient::new(
            ClientId::new(self.config.client_id.clone()),
            Some(ClientSecret::new(self.config.client_secret.clone())),
            AuthUrl::new(metadata.authorization_endpoint.clone())?,
            Some(TokenUrl::new(metadata.token_endpoint.clone())?),
        )
        .set_redirect_uri(RedirectUrl::new(redirect_uri.to_string())?);

        Ok(client)
    }

    /// Generate the authorization URL with PKCE, CSRF state and nonce
    pub async fn authorization_request(
        &self,
        redirect_uri: &str,
    ) -> Result<AuthorizationRequest, OidcError> {
        let metadata = self.metadata().await?;
        let client = self.oauth_client(metadata, redirect_uri)?;

        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();
        let nonce = CsrfToken::new_random();

        let mut request = client
            .authorize_url(CsrfToken::new_random)
            .set_pkce_challenge(pkce_challenge)
            .add_extra_param("nonce", nonce.secret().clone());

        for scope in &self.config.scopes {
            request = request.add_scope(Scope::new(scope.clone()));
        }

        let (url, csrf_state) = request.url();

        Ok(AuthorizationRequest {
            url,
            pending: PendingLogin {
                csrf_state: csrf_state.secret().clone(),
                pkce_verifier: pkce_verifier.secret().clone(),
                nonce: nonce.secret().clone(),
                redirect_uri: redirect_uri.to_string(),
                created_at: Utc::now().timestamp(),
            },
        })
    }

    /// Exchange the authorization code and resolve the user's identity
    pub async fn complete_login(
        &self,
        code: String,
        pending: &PendingLogin,
    ) -> Result<SessionUser, OidcError> {
        let metadata = self.metadata().await?;
        let client = self.oauth_client(metadata, &pending.redirect_uri)?;

        info!("Exchanging authorization code for a token set");

        let token_set = client
            .exchange_code(AuthorizationCode::new(code))
            .set_pkce_verifier(PkceCodeVerifier::new(pending.pkce_verifier.clone()))
            .request_async(|request| send_oauth_request(&self.http, request))
            .await
            .map_err(|e| OidcError::TokenExchange(e.to_string()))?;

        let userinfo = match token_set.extra_fields().id_token.as_deref() {
            Some(id_token) => self.verify_id_token(metadata, id_token, &pending.nonce).await?,
            None => {
                self.fetch_userinfo(metadata, token_set.access_token().secret())
                    .await?
            }
        };

        info!("User {} authenticated", userinfo.sub);
        Ok(SessionUser {
            token_set,
            userinfo,
        })
    }

    /// Verify the ID token against the provider key set and return its claims
    async fn verify_id_token(
        &self,
        metadata: &ProviderMetadata,
        id_token: &str,
        expected_nonce: &str,
    ) -> Result<UserInfo, OidcError> {
        let header = jsonwebtoken::decode_header(id_token)?;
        let jwks: JwkSet = self
            .http
            .get(&metadata.jwks_uri)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let jwk = match header.kid.as_deref() {
            Some(kid) => jwks.find(kid),
            None => jwks.keys.first(),
        }
        .ok_or_else(|| OidcError::UnknownKey(header.kid.clone().unwrap_or_default()))?;

        let key = DecodingKey::from_jwk(jwk)?;
        let mut validation = Validation::new(header.alg);
        validation.set_audience(&[&self.config.client_id]);
        validation.set_issuer(&[&metadata.issuer]);

        let token = jsonwebtoken::decode::<IdTokenClaims>(id_token, &key, &validation)?;
        if token.claims.nonce.as_deref() != Some(expected_nonce) {
            return Err(OidcError::NonceMismatch);
        }

        debug!("ID token verified for subject {}", token.claims.userinfo.sub);
        Ok(token.claims.userinfo)
    }

    async fn fetch_userinfo(
        &self,
        metadata: &ProviderMetadata,
        access_token: &str,
    ) -> Result<UserInfo, OidcError> {
        let endpoint = metadata
            .userinfo_endpoint
            .as_deref()
            .ok_or(OidcError::MissingIdentity)?;

        let userinfo = self
            .http
            .get(endpoint)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<UserInfo>()
            .await?;

        Ok(userinfo)
    }

    /// Provider logout URL returning the browser to `return_to`
    pub fn logout_url(&self, return_to: &str) -> Result<Url, OidcError> {
        let url = Url::parse_with_params(
            &format!("{}/v2/logout", self.config.base_url.trim_end_matches('/')),
            &[
                ("returnTo", return_to),
                ("client_id", self.config.client_id.as_str()),
            ],
        )?;
        Ok(url)
    }
}

/// Send an oauth2 request through the gateway's HTTP client, so the token
/// exchange shares its timeouts and redirect policy
async fn send_oauth_request(
    http: &reqwest::Client,
    request: HttpRequest,
) -> Result<HttpResponse, OidcError> {
    let method = reqwest::Method::from_bytes(request.method.as_str().as_bytes())
        .map_err(|e| OidcError::TokenExchange(e.to_string()))?;

    let mut builder = http.request(method, request.url.as_str());
    for (name, value) in request.headers.iter() {
        builder = builder.header(name.as_str(), value.as_bytes());
    }

    let response = builder.body(request.body).send().await?;

    let status_code = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| OidcError::TokenExchange(e.to_string()))?;
    let mut headers = HeaderMap::new();
    for (name, value) in response.headers() {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(name.as_str().as_bytes()),
            HeaderValue::from_bytes(value.as_bytes()),
        ) {
            headers.append(name, value);
        }
    }
    let body = response.bytes().await?.to_vec();

    Ok(HttpResponse {
        status_code,
        headers,
        body,
    })
}
