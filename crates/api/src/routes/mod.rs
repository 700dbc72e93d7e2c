pub mod accounts;
pub mod events;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the site route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                               homepage
///
/// /events/                        event list (earliest first)
/// /events/{event_id}/             event detail
/// /events/{event_id}/apply/       application form (GET, POST; login required)
/// /my-applications/               own applications (login required)
///
/// /register/                      registration (GET, POST)
/// /login/                         login (GET, POST)
/// /logout/                        logout (POST)
/// ```
pub fn site_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::pages::index))
        .merge(events::router())
        .merge(accounts::router())
        .fallback(handlers::pages::not_found)
}
