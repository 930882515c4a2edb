//! Route definitions for the `/flavors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::flavor;
use crate::state::AppState;

/// Routes mounted at `/flavors`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(flavor::list).post(flavor::create))
        .route(
            "/{id}",
            get(flavor::get_by_id)
                .put(flavor::update)
                .delete(flavor::delete),
        )
}
