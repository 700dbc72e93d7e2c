//! Browser sessions behind the login cookie.

use sqlx::FromRow;
use vylety_core::types::{DbId, Timestamp};

/// A row from `user_sessions`.
///
/// Live while `revoked_at` is unset and `expires_at` lies ahead.
#[derive(Debug, Clone, FromRow)]
pub struct UserSession {
    pub id: DbId,
    pub user_id: DbId,
    /// SHA-256 hex of the cookie's token id.
    pub token_hash: String,
    pub expires_at: Timestamp,
    /// Set by logout, or when a new login replaces this session.
    pub revoked_at: Option<Timestamp>,
    pub user_agent: Option<String>,
    pub created_at: Timestamp,
}

/// The visitor behind a live session: what page rendering needs to know.
#[derive(Debug, Clone, FromRow)]
pub struct SessionViewer {
    pub session_id: DbId,
    pub user_id: DbId,
    pub username: String,
}

/// Session to record at login or registration.
#[derive(Debug)]
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub user_agent: Option<String>,
}
