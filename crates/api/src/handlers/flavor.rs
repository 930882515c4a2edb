//! Handlers for the `/flavors` resource.
//!
//! A missing row is not an error: get and update answer `200` with `null`,
//! delete answers `204` either way. A path id that is not an `i64` can never
//! match a row, so it gets the same answers without touching the store.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use flavors_core::types::DbId;
use flavors_db::models::flavor::{CreateFlavor, Flavor, UpdateFlavor};
use flavors_db::repositories::FlavorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Parse a raw path segment into a row id; `None` means no row can match.
fn parse_id(raw: &str) -> Option<DbId> {
    let id = raw.parse::<DbId>().ok();
    if id.is_none() {
        tracing::debug!(raw_id = %raw, "Path id is not an integer, treating as missing");
    }
    id
}

/// GET /api/flavors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Flavor>>> {
    let flavors = FlavorRepo::list(&state.pool).await?;
    Ok(Json(flavors))
}

/// GET /api/flavors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Option<Flavor>>> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(Json(None));
    };

    let flavor = FlavorRepo::find_by_id(&state.pool, id).await?;
    if flavor.is_none() {
        tracing::debug!(flavor_id = id, "Flavor not found");
    }
    Ok(Json(flavor))
}

/// POST /api/flavors
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateFlavor>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Flavor>)> {
    let Json(input) = payload?;
    let flavor = FlavorRepo::create(&state.pool, &input).await?;

    tracing::info!(flavor_id = flavor.id, name = %flavor.name, "Flavor created");

    Ok((StatusCode::CREATED, Json(flavor)))
}

/// PUT /api/flavors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<UpdateFlavor>, JsonRejection>,
) -> AppResult<Json<Option<Flavor>>> {
    let Json(input) = payload?;
    let Some(id) = parse_id(&raw_id) else {
        return Ok(Json(None));
    };

    let flavor = FlavorRepo::update(&state.pool, id, &input).await?;

    match &flavor {
        Some(f) => tracing::info!(flavor_id = id, name = %f.name, "Flavor updated"),
        None => tracing::debug!(flavor_id = id, "Update matched no flavor"),
    }

    Ok(Json(flavor))
}

/// DELETE /api/flavors/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let Some(id) = parse_id(&raw_id) else {
        return Ok(StatusCode::NO_CONTENT);
    };

    let deleted = FlavorRepo::delete(&state.pool, id).await?;

    if deleted {
        tracing::info!(flavor_id = id, "Flavor deleted");
    } else {
        tracing::debug!(flavor_id = id, "Delete matched no flavor");
    }

    Ok(StatusCode::NO_CONTENT)
}
