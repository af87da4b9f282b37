//! Route definitions for the `/room-details` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::room_details;
use crate::state::AppState;

/// Routes mounted at `/room-details`.
///
/// ```text
/// GET    /           -> list (denormalized)
/// POST   /           -> create
/// GET    /by-room    -> get_by_criteria (?user_id=&building_id=&floor_id=&room_id=)
/// PUT    /{id}       -> update
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(room_details::list).post(room_details::create))
        .route("/by-room", get(room_details::get_by_criteria))
        .route(
            "/{id}",
            put(room_details::update).delete(room_details::delete),
        )
}
