//! Route definitions for account pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::accounts;
use crate::state::AppState;

/// ```text
/// GET, POST /register/  -> register_form, register
/// GET, POST /login/     -> login_form, login
/// POST      /logout/    -> logout
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/register/",
            get(accounts::register_form).post(accounts::register),
        )
        .route("/login/", get(accounts::login_form).post(accounts::login))
        .route("/logout/", post(accounts::logout))
}
