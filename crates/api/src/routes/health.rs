//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the store answered, `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    /// Result of a `SELECT 1` round trip through the pool.
    pub db_healthy: bool,
}

/// Always answers 200 so a load balancer can tell a live process with a
/// broken database apart from a dead one.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match flavors_db::health_check(&state.pool).await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
