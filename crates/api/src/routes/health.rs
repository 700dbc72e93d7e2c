//! Liveness and schema readiness for load balancers and deploy checks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use vylety_db::repositories::ApplicationRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when any check below fails.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// The seeded `application_statuses` rows match the status enum.
    pub statuses_in_sync: bool,
}

/// GET /health
///
/// 200 when the database answers and the status lookup table matches the
/// code; 503 otherwise, with the same body.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = vylety_db::health_check(&state.pool).await.is_ok();
    let statuses_in_sync = db_healthy
        && match ApplicationRepo::status_table_in_sync(&state.pool).await {
            Ok(in_sync) => in_sync,
            Err(e) => {
                tracing::warn!(error = %e, "Status table check failed");
                false
            }
        };

    let healthy = db_healthy && statuses_in_sync;
    let code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    let body = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        statuses_in_sync,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
