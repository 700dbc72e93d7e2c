//! Session-cookie authentication extractors for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use vylety_core::types::DbId;
use vylety_db::repositories::SessionRepo;

use crate::auth::session::{hash_token_id, read_cookie, validate_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// Signed-in user resolved from the session cookie.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Without a live session the request is answered with a
/// redirect to the login form and the handler body never runs:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Html<String>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id.
    pub user_id: DbId,
    pub username: String,
    /// The `user_sessions` row backing this request.
    pub session_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_session(&parts.headers, state).await? {
            Some(user) => Ok(user),
            None => {
                let next = parts
                    .uri
                    .path_and_query()
                    .map(|pq| pq.as_str())
                    .unwrap_or("/")
                    .to_string();
                Err(AppError::LoginRequired { next })
            }
        }
    }
}

/// The signed-in user, if any. For public pages that adapt to the visitor.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Option<AuthUser>);

impl CurrentUser {
    pub fn username(&self) -> Option<&str> {
        self.0.as_ref().map(|u| u.username.as_str())
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(resolve_session(&parts.headers, state).await?))
    }
}

/// Resolve the session cookie to an active user.
///
/// Returns `Ok(None)` for a missing, forged, expired or revoked session, or
/// when the user has since been deactivated. A request without the cookie
/// never touches the database.
pub(crate) async fn resolve_session(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<Option<AuthUser>, AppError> {
    let Some(token) = read_cookie(headers, SESSION_COOKIE) else {
        return Ok(None);
    };

    let claims = match validate_session_token(token, &state.config.session) {
        Ok(claims) => claims,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected session cookie");
            return Ok(None);
        }
    };

    let Some(viewer) =
        SessionRepo::find_viewer(&state.pool, &hash_token_id(&claims.jti)).await?
    else {
        return Ok(None);
    };
    if viewer.user_id != claims.sub {
        return Ok(None);
    }

    Ok(Some(AuthUser {
        user_id: viewer.user_id,
        username: viewer.username,
        session_id: viewer.session_id,
    }))
}
