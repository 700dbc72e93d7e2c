//! Route definitions for events and applications.

use axum::routing::get;
use axum::Router;

use crate::handlers::{applications, events};
use crate::state::AppState;

/// ```text
/// GET       /events/                      -> list
/// GET       /events/{event_id}/           -> detail
/// GET, POST /events/{event_id}/apply/     -> apply_form, apply
/// GET       /my-applications/             -> my_applications
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events/", get(events::list))
        .route("/events/{event_id}/", get(events::detail))
        .route(
            "/events/{event_id}/apply/",
            get(applications::apply_form).post(applications::apply),
        )
        .route("/my-applications/", get(applications::my_applications))
}
