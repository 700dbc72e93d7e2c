//! Repository for the `applications` table.

use sqlx::PgPool;
use vylety_core::application_status::ApplicationStatus;
use vylety_core::types::DbId;

use crate::models::application::{Application, ApplicationWithEvent, CreateApplication};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, event_id, note, status_id, created_at, updated_at";

/// Provides CRUD operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Whether `user_id` has already applied to `event_id`.
    pub async fn exists_for(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM applications WHERE user_id = $1 AND event_id = $2)",
        )
        .bind(user_id)
        .bind(event_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Find the application `user_id` made for `event_id`, if any.
    pub async fn find_for(
        pool: &PgPool,
        user_id: DbId,
        event_id: DbId,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM applications WHERE user_id = $1 AND event_id = $2");
        sqlx::query_as::<_, Application>(&query)
            .bind(user_id)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }

    /// Find an application by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a pending application unless one already exists for the
    /// (user, event) pair.
    ///
    /// Returns `None` when the pair was already taken, including when a
    /// concurrent request won the race on `uq_applications_user_event`.
    pub async fn create_if_absent(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications (user_id, event_id, note, status_id)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_applications_user_event DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.user_id)
            .bind(input.event_id)
            .bind(&input.note)
            .bind(ApplicationStatus::Pending.id())
            .fetch_optional(pool)
            .await
    }

    /// List a user's applications together with their events, earliest
    /// event first.
    pub async fn list_for_user_with_events(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ApplicationWithEvent>, sqlx::Error> {
        sqlx::query_as::<_, ApplicationWithEvent>(
            "SELECT a.id, a.event_id, a.note, a.status_id, a.created_at, \
                    e.name AS event_name, e.date AS event_date, e.place AS event_place \
             FROM applications a \
             JOIN events e ON e.id = a.event_id \
             WHERE a.user_id = $1 \
             ORDER BY e.date ASC, a.id ASC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Move an application to a new status on behalf of staff.
    ///
    /// Only transitions allowed by [`ApplicationStatus::can_transition_to`]
    /// are attempted, and the update is conditional on the row still being
    /// in one of the statuses that may reach `next`. Returns the updated row,
    /// or `None` when the application does not exist or the transition is
    /// not allowed from its current status.
    pub async fn transition_status(
        pool: &PgPool,
        id: DbId,
        next: ApplicationStatus,
    ) -> Result<Option<Application>, sqlx::Error> {
        let allowed_from: Vec<i16> = ApplicationStatus::ALL
            .into_iter()
            .filter(|from| from.can_transition_to(next))
            .map(ApplicationStatus::id)
            .collect();
        if allowed_from.is_empty() {
            return Ok(None);
        }

        let query = format!(
            "UPDATE applications SET status_id = $2
             WHERE id = $1 AND status_id = ANY($3)
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(next.id())
            .bind(&allowed_from)
            .fetch_optional(pool)
            .await?;

        if let Some(application) = &updated {
            tracing::info!(
                application_id = application.id,
                status = next.name(),
                "Application status changed"
            );
        }
        Ok(updated)
    }

    /// Whether `application_statuses` holds exactly the statuses
    /// [`ApplicationStatus`] knows, with the same ids and names.
    pub async fn status_table_in_sync(pool: &PgPool) -> Result<bool, sqlx::Error> {
        let rows: Vec<(i16, String)> =
            sqlx::query_as("SELECT id, name FROM application_statuses ORDER BY id")
                .fetch_all(pool)
                .await?;
        let expected = ApplicationStatus::ALL.map(|s| (s.id(), s.name()));
        Ok(rows.len() == expected.len()
            && rows
                .iter()
                .zip(expected)
                .all(|((id, name), (want_id, want_name))| *id == want_id && name == want_name))
    }
}
