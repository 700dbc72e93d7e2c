//! Static pages and the not-found fallback.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::middleware::auth::CurrentUser;
use crate::views;

/// GET /
pub async fn index(current: CurrentUser) -> Html<String> {
    Html(views::pages::index(current.username()))
}

/// Fallback for unknown paths.
pub async fn not_found(current: CurrentUser) -> Response {
    let status = StatusCode::NOT_FOUND;
    let html = views::errors::error_page(
        status,
        "The page you requested does not exist.",
        current.username(),
    );
    (status, Html(html)).into_response()
}
