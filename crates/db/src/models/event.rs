//! Event (excursion) entity model and DTOs.

use sqlx::FromRow;
use vylety_core::types::{Date, DbId, Timestamp};

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow)]
pub struct Event {
    pub id: DbId,
    pub name: String,
    pub date: Date,
    /// Short summary shown in listings.
    pub description: String,
    pub long_description: String,
    pub place: String,
    /// e.g. "15–20".
    pub age_group: String,
    /// e.g. "high school students".
    pub target_group: String,
    pub price_description: String,
    pub food_info: String,
    pub to_bring: String,
    pub contact: String,
    /// The programme is not final yet.
    pub schedule_coming_later: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an event (staff tooling and fixtures).
#[derive(Debug, Clone)]
pub struct CreateEvent {
    pub name: String,
    pub date: Date,
    pub description: String,
    pub long_description: String,
    pub place: String,
    pub age_group: String,
    pub target_group: String,
    pub price_description: String,
    pub food_info: String,
    pub to_bring: String,
    pub contact: String,
    pub schedule_coming_later: bool,
}
