//! Applying to events and listing one's own applications.
//!
//! Every handler here takes [`AuthUser`], so anonymous requests are
//! redirected to login before any lookup happens.

use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use vylety_core::forms::{ApplicationForm, FieldErrors};
use vylety_core::types::DbId;
use vylety_db::models::application::CreateApplication;
use vylety_db::repositories::ApplicationRepo;

use crate::error::AppResult;
use crate::handlers::events::find_event;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::views;

const MY_APPLICATIONS_PATH: &str = "/my-applications/";

fn event_path(event_id: DbId) -> String {
    format!("/events/{event_id}/")
}

/// GET /events/{event_id}/apply/
///
/// Empty note form, or straight back to the event when the user already
/// applied.
pub async fn apply_form(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<String>,
) -> AppResult<Response> {
    let event = find_event(&state, &event_id).await?;

    if ApplicationRepo::exists_for(&state.pool, auth.user_id, event.id).await? {
        return Ok(Redirect::to(&event_path(event.id)).into_response());
    }

    let html = views::applications::apply_form(
        &event,
        &ApplicationForm::default(),
        &FieldErrors::new(),
        Some(&auth.username),
    );
    Ok(Html(html).into_response())
}

/// POST /events/{event_id}/apply/
///
/// Creates a pending application bound to the signed-in user and the event
/// in the path. A repeat submission creates nothing and lands on the event
/// page.
pub async fn apply(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<String>,
    Form(form): Form<ApplicationForm>,
) -> AppResult<Response> {
    let event = find_event(&state, &event_id).await?;

    if ApplicationRepo::exists_for(&state.pool, auth.user_id, event.id).await? {
        return Ok(Redirect::to(&event_path(event.id)).into_response());
    }

    let note = match form.parse() {
        Ok(note) => note,
        Err(errors) => {
            let html =
                views::applications::apply_form(&event, &form, &errors, Some(&auth.username));
            return Ok(Html(html).into_response());
        }
    };

    let input = CreateApplication {
        user_id: auth.user_id,
        event_id: event.id,
        note,
    };
    match ApplicationRepo::create_if_absent(&state.pool, &input).await? {
        Some(application) => {
            tracing::info!(
                application_id = application.id,
                user_id = auth.user_id,
                event_id = event.id,
                "Application submitted"
            );
            Ok(Redirect::to(MY_APPLICATIONS_PATH).into_response())
        }
        // Lost a race with a concurrent submission for the same pair.
        None => Ok(Redirect::to(&event_path(event.id)).into_response()),
    }
}

/// GET /my-applications/
///
/// The signed-in user's applications with their events.
pub async fn my_applications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> AppResult<Html<String>> {
    let applications =
        ApplicationRepo::list_for_user_with_events(&state.pool, auth.user_id).await?;
    Ok(Html(views::applications::my_applications(
        &applications,
        Some(&auth.username),
    )))
}
