//! Route tree for the admin API.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod health;
pub mod person;
pub mod room;
pub mod room_details;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/admin` route tree.
///
/// Every route except `/auth/login` requires a bearer token (enforced by the
/// `AuthUser` extractor on each handler).
///
/// ```text
/// /auth/login                      login (public)
///
/// /buildings                       list, create
/// /buildings/{id}                  get, update, delete
/// /floors                          list, create
/// /floors/{id}                     get, update, delete
/// /room-categories                 list, create
/// /room-categories/{id}            get, update, delete
/// /common-features                 list, create
/// /common-features/{id}            get, update, delete
/// /furnitures                      list, create
/// /furnitures/{id}                 get, update, delete
/// /bed-specs                       list, create
/// /bed-specs/{id}                  get, update, delete
/// /bathroom-specs                  list, create
/// /bathroom-specs/{id}             get, update, delete
/// /paid-items                      list, create
/// /paid-items/{id}                 get, update, delete
///
/// /persons                         list (?search=), create
/// /persons/{id}                    get, update, delete
///
/// /rooms                           list (joined/filtered/paginated), create
/// /rooms/{id}                      get, update, delete
///
/// /room-details                    list (denormalized), create
/// /room-details/by-room            get by (user, building, floor, room)
/// /room-details/{id}               update, delete
///
/// /bookings                        list (?search=&from=&to=), create
/// /bookings/available-rooms        availability search (?start=&end=)
/// /bookings/{id}                   get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/buildings", catalog::building_router())
        .nest("/floors", catalog::floor_router())
        .nest("/room-categories", catalog::room_category_router())
        .nest("/common-features", catalog::common_feature_router())
        .nest("/furnitures", catalog::furniture_router())
        .nest("/bed-specs", catalog::bed_spec_router())
        .nest("/bathroom-specs", catalog::bathroom_spec_router())
        .nest("/paid-items", catalog::paid_item_router())
        .nest("/persons", person::router())
        .nest("/rooms", room::router())
        .nest("/room-details", room_details::router())
        .nest("/bookings", booking::router())
}
