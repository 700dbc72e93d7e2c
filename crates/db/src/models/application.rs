//! Application entity model: a user's request to attend an event.

use sqlx::FromRow;
use vylety_core::application_status::{ApplicationStatus, StatusId};
use vylety_core::types::{Date, DbId, Timestamp};

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow)]
pub struct Application {
    pub id: DbId,
    pub user_id: DbId,
    pub event_id: DbId,
    pub note: String,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Application {
    /// Typed status; unknown IDs read as pending.
    pub fn status(&self) -> ApplicationStatus {
        ApplicationStatus::from_id(self.status_id).unwrap_or_default()
    }
}

/// An application joined with the event fields needed to list it.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationWithEvent {
    pub id: DbId,
    pub event_id: DbId,
    pub note: String,
    pub status_id: StatusId,
    pub created_at: Timestamp,
    pub event_name: String,
    pub event_date: Date,
    pub event_place: String,
}

impl ApplicationWithEvent {
    pub fn status(&self) -> ApplicationStatus {
        ApplicationStatus::from_id(self.status_id).unwrap_or_default()
    }
}

/// DTO for creating an application. Status always starts as pending.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub user_id: DbId,
    pub event_id: DbId,
    pub note: String,
}
