//! Registration, login and logout.

use axum::extract::{Query, State};
use axum::http::header::{SET_COOKIE, USER_AGENT};
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use vylety_core::forms::{FieldErrors, LoginForm, RegistrationForm};
use vylety_core::types::DbId;
use vylety_db::models::session::CreateSession;
use vylety_db::models::user::CreateUser;
use vylety_db::repositories::{SessionRepo, UserRepo};

use crate::auth::password::{hash_password, verify_password};
use crate::auth::redirect::{safe_next, DEFAULT_REDIRECT};
use crate::auth::session::{clear_session_cookie, issue_session, session_cookie};
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::views;

const USERNAME_TAKEN: &str = "A user with that username already exists.";
const INVALID_LOGIN: &str = "Please enter a correct username and password.";
const INACTIVE_ACCOUNT: &str = "This account is inactive.";

/// Query string of `GET /login/`.
#[derive(Debug, Default, Deserialize)]
pub struct NextParams {
    #[serde(default)]
    pub next: String,
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// GET /register/
pub async fn register_form(current: CurrentUser) -> Html<String> {
    Html(views::accounts::register_form(
        &RegistrationForm::default(),
        &FieldErrors::new(),
        current.username(),
    ))
}

/// POST /register/
///
/// Creates the account, signs the new user in and sends them to the event
/// list. Invalid input re-renders the form with field errors.
pub async fn register(
    State(state): State<AppState>,
    current: CurrentUser,
    headers: HeaderMap,
    Form(form): Form<RegistrationForm>,
) -> AppResult<Response> {
    let rerender = |errors: &FieldErrors| {
        Html(views::accounts::register_form(&form, errors, current.username())).into_response()
    };

    let (valid, mut errors) = match form.parse() {
        Ok(valid) => (Some(valid), FieldErrors::new()),
        Err(errors) => (None, errors),
    };

    // Report a taken username alongside any other field errors.
    let username = form.username.trim();
    if !errors.has("username") && UserRepo::username_exists(&state.pool, username).await? {
        errors.add("username", USERNAME_TAKEN);
    }

    let Some(valid) = valid.filter(|_| errors.is_empty()) else {
        return Ok(rerender(&errors));
    };

    let password_hash = hash_password(&valid.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let input = CreateUser {
        username: valid.username,
        password_hash,
        first_name: valid.first_name,
        last_name: valid.last_name,
        email: valid.email,
        dob: valid.dob,
        street: valid.street,
        city: valid.city,
        number: valid.number,
        postal_code: valid.postal_code,
        phone: valid.phone,
        school: valid.school,
        grade: valid.grade,
        id_number: valid.id_number,
    };
    let user = match UserRepo::create(&state.pool, &input).await {
        Ok(user) => user,
        Err(e) if is_unique_violation(&e, "uq_users_username") => {
            let mut errors = FieldErrors::new();
            errors.add("username", USERNAME_TAKEN);
            return Ok(rerender(&errors));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let cookie = start_session(&state, &current, user.id, &headers).await?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to(DEFAULT_REDIRECT)).into_response())
}

// ---------------------------------------------------------------------------
// Login / logout
// ---------------------------------------------------------------------------

/// GET /login/
pub async fn login_form(current: CurrentUser, Query(params): Query<NextParams>) -> Html<String> {
    let form = LoginForm {
        next: params.next,
        ..LoginForm::default()
    };
    Html(views::accounts::login_form(
        &form,
        &FieldErrors::new(),
        current.username(),
    ))
}

/// POST /login/
///
/// On valid credentials for an active account, starts a session and
/// redirects to `next` (when it is a local path) or the event list.
pub async fn login(
    State(state): State<AppState>,
    current: CurrentUser,
    headers: HeaderMap,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    let rerender = |errors: &FieldErrors| {
        Html(views::accounts::login_form(&form, errors, current.username())).into_response()
    };

    if let Err(errors) = form.check() {
        return Ok(rerender(&errors));
    }

    let Some(user) = UserRepo::find_by_username(&state.pool, form.username.trim()).await? else {
        // Spend the same hashing effort as a real check so response time
        // does not reveal which usernames exist.
        let _ = hash_password(&form.password);
        let mut errors = FieldErrors::new();
        errors.add_non_field(INVALID_LOGIN);
        return Ok(rerender(&errors));
    };

    let password_valid = verify_password(&form.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::info!(user_id = user.id, "Failed login");
        let mut errors = FieldErrors::new();
        errors.add_non_field(INVALID_LOGIN);
        return Ok(rerender(&errors));
    }

    if !user.is_active {
        let mut errors = FieldErrors::new();
        errors.add_non_field(INACTIVE_ACCOUNT);
        return Ok(rerender(&errors));
    }

    UserRepo::record_login(&state.pool, user.id).await?;
    tracing::info!(user_id = user.id, "User logged in");

    let cookie = start_session(&state, &current, user.id, &headers).await?;
    let target = safe_next(&form.next).to_string();
    Ok(([(SET_COOKIE, cookie)], Redirect::to(&target)).into_response())
}

/// POST /logout/
///
/// Revokes the current session (if any), clears the cookie and returns to
/// the homepage.
pub async fn logout(State(state): State<AppState>, current: CurrentUser) -> AppResult<Response> {
    if let Some(user) = &current.0 {
        SessionRepo::revoke(&state.pool, user.session_id).await?;
        tracing::info!(user_id = user.user_id, "User logged out");
    }
    let cookie = clear_session_cookie(&state.config.session);
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Persist a new session for `user_id` and return its `Set-Cookie` value.
///
/// Any session the browser already carried is revoked first.
async fn start_session(
    state: &AppState,
    current: &CurrentUser,
    user_id: DbId,
    headers: &HeaderMap,
) -> AppResult<String> {
    if let Some(previous) = &current.0 {
        SessionRepo::revoke(&state.pool, previous.session_id).await?;
    }

    let issued = issue_session(user_id, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Session token error: {e}")))?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let input = CreateSession {
        user_id,
        token_hash: issued.token_hash,
        expires_at: issued.expires_at,
        user_agent,
    };
    SessionRepo::create(&state.pool, &input).await?;

    Ok(session_cookie(&issued.token, &state.config.session))
}
