//! Login sessions: created at sign-in, resolved on every request that
//! carries the cookie, revoked at logout.

use sqlx::PgPool;
use vylety_core::types::DbId;

use crate::models::session::{CreateSession, SessionViewer, UserSession};

const COLUMNS: &str = "id, user_id, token_hash, expires_at, revoked_at, user_agent, created_at";

pub struct SessionRepo;

impl SessionRepo {
    /// Record a new session.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<UserSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO user_sessions (user_id, token_hash, expires_at, user_agent)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserSession>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(&input.user_agent)
            .fetch_one(pool)
            .await
    }

    /// Resolve a token hash to the signed-in visitor.
    ///
    /// `None` unless the session is unrevoked and unexpired *and* its user
    /// is still active, so deactivating an account ends its sessions at
    /// once.
    pub async fn find_viewer(
        pool: &PgPool,
        token_hash: &str,
    ) -> Result<Option<SessionViewer>, sqlx::Error> {
        sqlx::query_as::<_, SessionViewer>(
            "SELECT s.id AS session_id, u.id AS user_id, u.username
             FROM user_sessions s
             JOIN users u ON u.id = s.user_id
             WHERE s.token_hash = $1
               AND s.revoked_at IS NULL
               AND s.expires_at > NOW()
               AND u.is_active",
        )
        .bind(token_hash)
        .fetch_optional(pool)
        .await
    }

    /// Stamp `revoked_at`. Returns `false` if the session was already revoked.
    pub async fn revoke(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET revoked_at = NOW() WHERE id = $1 AND revoked_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete sessions that can no longer sign anyone in (expired or
    /// revoked). Returns the number of rows removed.
    pub async fn purge_dead(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM user_sessions WHERE expires_at <= NOW() OR revoked_at IS NOT NULL",
        )
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
