//! Route definitions for the reference catalog resources.
//!
//! Eight catalog entities share the same CRUD route shape:
//!
//! ```text
//! GET    /       -> list
//! POST   /       -> create
//! GET    /{id}   -> get_by_id
//! PUT    /{id}   -> update
//! DELETE /{id}   -> delete (soft, body carries the actor)
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::{
    bathroom_spec, bed_spec, building, common_feature, floor, furniture, paid_item, room_category,
};
use crate::state::AppState;

/// Routes mounted at `/buildings`.
pub fn building_router() -> Router<AppState> {
    Router::new()
        .route("/", get(building::list).post(building::create))
        .route(
            "/{id}",
            get(building::get_by_id)
                .put(building::update)
                .delete(building::delete),
        )
}

/// Routes mounted at `/floors`.
pub fn floor_router() -> Router<AppState> {
    Router::new()
        .route("/", get(floor::list).post(floor::create))
        .route(
            "/{id}",
            get(floor::get_by_id)
                .put(floor::update)
                .delete(floor::delete),
        )
}

/// Routes mounted at `/room-categories`.
pub fn room_category_router() -> Router<AppState> {
    Router::new()
        .route("/", get(room_category::list).post(room_category::create))
        .route(
            "/{id}",
            get(room_category::get_by_id)
                .put(room_category::update)
                .delete(room_category::delete),
        )
}

/// Routes mounted at `/common-features`.
pub fn common_feature_router() -> Router<AppState> {
    Router::new()
        .route("/", get(common_feature::list).post(common_feature::create))
        .route(
            "/{id}",
            get(common_feature::get_by_id)
                .put(common_feature::update)
                .delete(common_feature::delete),
        )
}

/// Routes mounted at `/furnitures`.
pub fn furniture_router() -> Router<AppState> {
    Router::new()
        .route("/", get(furniture::list).post(furniture::create))
        .route(
            "/{id}",
            get(furniture::get_by_id)
                .put(furniture::update)
                .delete(furniture::delete),
        )
}

/// Routes mounted at `/bed-specs`.
pub fn bed_spec_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bed_spec::list).post(bed_spec::create))
        .route(
            "/{id}",
            get(bed_spec::get_by_id)
                .put(bed_spec::update)
                .delete(bed_spec::delete),
        )
}

/// Routes mounted at `/bathroom-specs`.
pub fn bathroom_spec_router() -> Router<AppState> {
    Router::new()
        .route("/", get(bathroom_spec::list).post(bathroom_spec::create))
        .route(
            "/{id}",
            get(bathroom_spec::get_by_id)
                .put(bathroom_spec::update)
                .delete(bathroom_spec::delete),
        )
}

/// Routes mounted at `/paid-items`.
pub fn paid_item_router() -> Router<AppState> {
    Router::new()
        .route("/", get(paid_item::list).post(paid_item::create))
        .route(
            "/{id}",
            get(paid_item::get_by_id)
                .put(paid_item::update)
                .delete(paid_item::delete),
        )
}
