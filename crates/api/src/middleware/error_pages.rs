//! Error pages with the visitor's navigation.
//!
//! [`AppError`](crate::error::AppError) renders its page without access to
//! the request. This layer sees both: when a response carries an
//! [`ErrorPage`] and the request has a live session, the page is rendered
//! again for the signed-in user. Successful responses pass through without
//! a session lookup.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::CONTENT_LENGTH;
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::session::{read_cookie, SESSION_COOKIE};
use crate::error::ErrorPage;
use crate::middleware::auth::resolve_session;
use crate::state::AppState;
use crate::views;

pub async fn with_viewer(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let headers = req.headers().clone();
    let response = next.run(req).await;

    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };
    if read_cookie(&headers, SESSION_COOKIE).is_none() {
        return response;
    }

    match resolve_session(&headers, &state).await {
        Ok(Some(user)) => {
            let html =
                views::errors::error_page(page.status, &page.message, Some(&user.username));
            let (mut parts, _) = response.into_parts();
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(html))
        }
        Ok(None) => response,
        Err(e) => {
            tracing::debug!(error = %e, "Could not resolve viewer for error page");
            response
        }
    }
}
