//! Read-only event catalogue pages.

use axum::extract::{Path, State};
use axum::response::Html;
use vylety_core::error::CoreError;
use vylety_core::types::DbId;
use vylety_db::models::event::Event;
use vylety_db::repositories::{ApplicationRepo, EventRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views;

/// GET /events/
///
/// All events, earliest date first.
pub async fn list(State(state): State<AppState>, current: CurrentUser) -> AppResult<Html<String>> {
    let events = EventRepo::list_by_date(&state.pool).await?;
    Ok(Html(views::events::list(&events, current.username())))
}

/// GET /events/{event_id}/
///
/// Event detail. For a signed-in visitor the page also shows their
/// application status when they already applied.
pub async fn detail(
    State(state): State<AppState>,
    current: CurrentUser,
    Path(event_id): Path<String>,
) -> AppResult<Html<String>> {
    let event = find_event(&state, &event_id).await?;

    let application = match &current.0 {
        Some(user) => ApplicationRepo::find_for(&state.pool, user.user_id, event.id)
            .await?
            .map(|a| a.status()),
        None => None,
    };

    Ok(Html(views::events::detail(
        &event,
        current.username(),
        application,
    )))
}

/// Load the event named by a raw `{event_id}` path segment.
///
/// A segment that is not a valid id is reported exactly like an id with no
/// row behind it.
pub(crate) async fn find_event(state: &AppState, event_id: &str) -> AppResult<Event> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Event",
            key: event_id.to_string(),
        })
    };
    let id = parse_event_id(event_id).ok_or_else(not_found)?;
    EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(not_found)
}

/// Decimal event id; anything else (letters, overflow) is `None`.
fn parse_event_id(raw: &str) -> Option<DbId> {
    raw.parse::<DbId>().ok().filter(|id| *id > 0)
}
