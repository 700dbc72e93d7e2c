//! Signed session cookies.
//!
//! The cookie value is an HS256 JWT whose claims name the user and carry a
//! random token id (`jti`). Only the SHA-256 of that id is stored in
//! `user_sessions`, so a session is live while its row is unrevoked and
//! unexpired, and a database leak does not yield usable cookies.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;
use vylety_core::types::{DbId, Timestamp};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "vylety_session";

/// Default session lifetime: two weeks.
const DEFAULT_EXPIRY_HOURS: i64 = 24 * 14;

/// Claims embedded in every session cookie.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject -- the user's internal database id.
    pub sub: DbId,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Random token id; its hash keys the `user_sessions` row.
    pub jti: String,
}

/// Configuration for session cookies.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to sign and verify cookies.
    pub secret: String,
    /// Session lifetime in hours.
    pub expiry_hours: i64,
    /// Add the `Secure` attribute (HTTPS deployments).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                  | Required | Default |
    /// |--------------------------|----------|---------|
    /// | `SESSION_SECRET`         | **yes**  | --      |
    /// | `SESSION_EXPIRY_HOURS`   | no       | `336`   |
    /// | `SESSION_COOKIE_SECURE`  | no       | `false` |
    ///
    /// # Panics
    ///
    /// Panics if `SESSION_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "SESSION_SECRET must not be empty");

        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let cookie_secure: bool = std::env::var("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("SESSION_COOKIE_SECURE must be true or false");

        Self {
            secret,
            expiry_hours,
            cookie_secure,
        }
    }
}

/// A freshly signed session cookie and what must be persisted for it.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    /// The signed token sent to the browser.
    pub token: String,
    /// SHA-256 hex of the token id, stored server-side.
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// Sign a new session token for `user_id`.
pub fn issue_session(
    user_id: DbId,
    config: &SessionConfig,
) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.expiry_hours);
    let jti = Uuid::new_v4().to_string();

    let claims = SessionClaims {
        sub: user_id,
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
        jti: jti.clone(),
    };

    let token = encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedSession {
        token,
        token_hash: hash_token_id(&jti),
        expires_at,
    })
}

/// Validate a session token's signature and expiry, returning its claims.
pub fn validate_session_token(
    token: &str,
    config: &SessionConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Compute the SHA-256 hex digest of a token id.
pub fn hash_token_id(jti: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(jti.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// `Set-Cookie` value installing a session token.
pub fn session_cookie(token: &str, config: &SessionConfig) -> String {
    let max_age = config.expiry_hours * 3600;
    let mut cookie =
        format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age}");
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value removing the session cookie.
pub fn clear_session_cookie(config: &SessionConfig) -> String {
    let mut cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    if config.cookie_secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Find cookie `name` across all `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
        .filter(|value| !value.is_empty())
}
