#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use vylety_api::auth::password::hash_password;
use vylety_api::auth::session::{SessionConfig, SESSION_COOKIE};
use vylety_api::config::ServerConfig;
use vylety_api::router::build_app_router;
use vylety_api::state::AppState;
use vylety_db::models::event::{CreateEvent, Event};
use vylety_db::models::user::{CreateUser, User};
use vylety_db::repositories::{EventRepo, UserRepo};

/// Password given to every user made by [`create_user`].
pub const PASSWORD: &str = "kometa-v-noci-42";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        session: SessionConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_hours: 1,
            cookie_secure: false,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool. Same stack as production.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("router should not fail")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    get_with_cookie(app, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

/// POST an `application/x-www-form-urlencoded` body built from `fields`.
pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response<Body> {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("response should redirect")
        .to_str()
        .unwrap()
}

/// `name=value` pair of the session cookie set by `response`, ready to send
/// back in a `Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .find(|pair| pair.starts_with(&format!("{SESSION_COOKIE}=")))
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn new_user(username: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        password_hash: hash_password(PASSWORD).expect("hashing should succeed"),
        first_name: "Jana".into(),
        last_name: "Nováková".into(),
        email: format!("{username}@example.cz"),
        dob: NaiveDate::from_ymd_opt(2008, 4, 17).unwrap(),
        street: "Husova".into(),
        city: "Brno".into(),
        number: "12".into(),
        postal_code: "60200".into(),
        phone: "+420777123456".into(),
        school: "Gymnázium Brno".into(),
        grade: "3.A".into(),
        id_number: "085417/1234".into(),
    }
}

pub async fn create_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(pool, &new_user(username))
        .await
        .expect("user creation should succeed")
}

pub async fn create_event(pool: &PgPool, name: &str, date: NaiveDate) -> Event {
    let input = CreateEvent {
        name: name.to_string(),
        date,
        description: format!("{name} in one sentence"),
        long_description: "Programme details.".into(),
        place: "Brno".into(),
        age_group: "15–20".into(),
        target_group: "high school students".into(),
        price_description: "Free".into(),
        food_info: "Lunch provided".into(),
        to_bring: "Notebook".into(),
        contact: "info@example.cz".into(),
        schedule_coming_later: false,
    };
    EventRepo::create(pool, &input)
        .await
        .expect("event creation should succeed")
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Log in through the real endpoint and return the session cookie pair.
pub async fn login(pool: &PgPool, username: &str) -> String {
    let app = build_test_app(pool.clone());
    let response = post_form(
        app,
        "/login/",
        &[("username", username), ("password", PASSWORD)],
        None,
    )
    .await;
    assert_eq!(response.status(), 303, "login should redirect");
    session_cookie(&response).expect("login should set a session cookie")
}
