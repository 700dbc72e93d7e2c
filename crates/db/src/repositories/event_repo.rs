//! Repository for the `events` table.
//!
//! Events are maintained by staff; the public site only reads them.

use sqlx::PgPool;
use vylety_core::types::DbId;

use crate::models::event::{CreateEvent, Event};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, date, description, long_description, place, age_group, \
                        target_group, price_description, food_info, to_bring, contact, \
                        schedule_coming_later, created_at, updated_at";

/// Provides read access (and a staff insert) for events.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEvent) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events (name, date, description, long_description, place, age_group,
                                 target_group, price_description, food_info, to_bring, contact,
                                 schedule_coming_later)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(&input.name)
            .bind(input.date)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.place)
            .bind(&input.age_group)
            .bind(&input.target_group)
            .bind(&input.price_description)
            .bind(&input.food_info)
            .bind(&input.to_bring)
            .bind(&input.contact)
            .bind(input.schedule_coming_later)
            .fetch_one(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all events, earliest date first. Same-day events keep insertion order.
    pub async fn list_by_date(pool: &PgPool) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events ORDER BY date ASC, id ASC");
        sqlx::query_as::<_, Event>(&query).fetch_all(pool).await
    }
}
