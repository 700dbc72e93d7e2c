//! HTTP-level tests for applying to events and listing applications.

mod common;

use axum::http::StatusCode;
use common::{
    body_text, create_event, create_user, date, get, get_with_cookie, location, login, post_form,
};
use sqlx::PgPool;
use vylety_core::application_status::ApplicationStatus;
use vylety_db::repositories::ApplicationRepo;

async fn application_count(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM applications")
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

// ---------------------------------------------------------------------------
// Login guard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_apply_redirects_to_login(pool: PgPool) {
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let uri = format!("/events/{}/apply/", event.id);

    let response = get(common::build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        location(&response),
        format!("/login/?next=%2Fevents%2F{}%2Fapply%2F", event.id)
    );

    let response = post_form(
        common::build_test_app(pool.clone()),
        &uri,
        &[("note", "hi")],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login/"));
    assert_eq!(application_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_apply_to_missing_event_still_redirects(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/events/424242/apply/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(location(&response).starts_with("/login/"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_my_applications_redirects_to_login(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/my-applications/").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/login/?next=%2Fmy-applications%2F");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn forged_cookie_is_treated_as_anonymous(pool: PgPool) {
    let response = get_with_cookie(
        common::build_test_app(pool),
        "/my-applications/",
        Some("vylety_session=not.a.token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ---------------------------------------------------------------------------
// Applying
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn apply_form_renders_for_signed_in_user(pool: PgPool) {
    create_user(&pool, "jana").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;

    let uri = format!("/events/{}/apply/", event.id);
    let response = get_with_cookie(common::build_test_app(pool), &uri, Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(r#"name="note""#));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn first_application_is_pending_and_bound_to_session_user(pool: PgPool) {
    let user = create_user(&pool, "jana").await;
    let other = create_user(&pool, "petr").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;

    let uri = format!("/events/{}/apply/", event.id);
    // Client-supplied ownership fields are ignored.
    let other_id = other.id.to_string();
    let response = post_form(
        common::build_test_app(pool.clone()),
        &uri,
        &[
            ("note", "  Vegetarian lunch please "),
            ("user_id", other_id.as_str()),
            ("status", "approved"),
        ],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/my-applications/");

    assert_eq!(application_count(&pool).await, 1);
    let application = ApplicationRepo::find_for(&pool, user.id, event.id)
        .await
        .unwrap()
        .expect("application should exist for the session user");
    assert_eq!(application.status(), ApplicationStatus::Pending);
    assert_eq!(application.note, "Vegetarian lunch please");
    assert!(!ApplicationRepo::exists_for(&pool, other.id, event.id)
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_note_is_accepted(pool: PgPool) {
    create_user(&pool, "jana").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;

    let uri = format!("/events/{}/apply/", event.id);
    let response =
        post_form(common::build_test_app(pool.clone()), &uri, &[], Some(&cookie)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(application_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn repeat_application_redirects_to_event_without_new_record(pool: PgPool) {
    create_user(&pool, "jana").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;
    let uri = format!("/events/{}/apply/", event.id);
    let detail = format!("/events/{}/", event.id);

    let first = post_form(
        common::build_test_app(pool.clone()),
        &uri,
        &[("note", "first")],
        Some(&cookie),
    )
    .await;
    assert_eq!(first.status(), StatusCode::SEE_OTHER);

    let again = post_form(
        common::build_test_app(pool.clone()),
        &uri,
        &[("note", "second")],
        Some(&cookie),
    )
    .await;
    assert_eq!(again.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&again), detail);

    let form = get_with_cookie(common::build_test_app(pool.clone()), &uri, Some(&cookie)).await;
    assert_eq!(form.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&form), detail);

    assert_eq!(application_count(&pool).await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn overlong_note_rerenders_with_error(pool: PgPool) {
    create_user(&pool, "jana").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;

    let uri = format!("/events/{}/apply/", event.id);
    let note = "x".repeat(2001);
    let response = post_form(
        common::build_test_app(pool.clone()),
        &uri,
        &[("note", note.as_str())],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("at most 2000 characters"));
    assert_eq!(application_count(&pool).await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn applying_to_missing_event_is_not_found(pool: PgPool) {
    create_user(&pool, "jana").await;
    let cookie = login(&pool, "jana").await;

    let response = post_form(
        common::build_test_app(pool.clone()),
        "/events/424242/apply/",
        &[("note", "hi")],
        Some(&cookie),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(application_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn my_applications_lists_only_own_applications(pool: PgPool) {
    create_user(&pool, "jana").await;
    create_user(&pool, "petr").await;
    let comets = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let genes = create_event(&pool, "Genes", date(2026, 5, 1)).await;

    let jana = login(&pool, "jana").await;
    let petr = login(&pool, "petr").await;
    for (cookie, event) in [(&jana, &comets), (&petr, &genes)] {
        let uri = format!("/events/{}/apply/", event.id);
        let response =
            post_form(common::build_test_app(pool.clone()), &uri, &[], Some(cookie)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    let response = get_with_cookie(
        common::build_test_app(pool),
        "/my-applications/",
        Some(&jana),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Comets"));
    assert!(html.contains(ApplicationStatus::Pending.label()));
    assert!(!html.contains("Genes"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn event_detail_shows_existing_application_status(pool: PgPool) {
    create_user(&pool, "jana").await;
    let event = create_event(&pool, "Comets", date(2026, 3, 1)).await;
    let cookie = login(&pool, "jana").await;
    let uri = format!("/events/{}/apply/", event.id);
    post_form(common::build_test_app(pool.clone()), &uri, &[], Some(&cookie)).await;

    let detail = format!("/events/{}/", event.id);
    let response = get_with_cookie(common::build_test_app(pool), &detail, Some(&cookie)).await;
    let html = body_text(response).await;
    assert!(html.contains("You have applied"));
    assert!(!html.contains(&uri));
}
