//! Handlers for the `/bookings` resource and the availability search.
//!
//! Booking intervals are half-open `[start_time, end_time)`. Totals are
//! accepted from the caller verbatim; `total_days` is derived server-side.
//! The overlap check and the write run in one transaction in the repository,
//! so a lost race surfaces here as a 409 rather than a double booking.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use dormhub_core::booking::{total_days, validate_interval};
use dormhub_core::error::CoreError;
use dormhub_core::types::{DbId, Timestamp};
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::booking::{
    AvailableRoom, Booking, BookingListFilter, BookingWithNames, BookingWrite, CreateBooking,
    UpdateBooking,
};
use dormhub_db::repositories::{BookingRepo, PersonRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// Query parameters for the booking listing.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub from: Option<Timestamp>,
    pub to: Option<Timestamp>,
    pub search: Option<String>,
}

/// Query parameters for the availability search.
#[derive(Debug, Deserialize)]
pub struct AvailabilityParams {
    pub start: Timestamp,
    pub end: Timestamp,
}

async fn ensure_room_and_person_exist(
    state: &AppState,
    room_id: DbId,
    person_id: DbId,
) -> AppResult<()> {
    if !RoomRepo::exists_active(&state.pool, room_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }));
    }
    if !PersonRepo::exists_active(&state.pool, person_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id: person_id,
        }));
    }
    Ok(())
}

/// POST /api/admin/bookings
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Envelope<Booking>>)> {
    validate_interval(input.start_time, input.end_time)?;
    ensure_room_and_person_exist(&state, input.room_id, input.person_id).await?;
    ensure_user_exists(&state, input.created_by).await?;

    let days = total_days(input.start_time, input.end_time);
    match BookingRepo::create(&state.pool, &input, days).await? {
        BookingWrite::Written(booking) => Ok((
            StatusCode::CREATED,
            Json(Envelope::created("Room booking created successfully", booking)),
        )),
        BookingWrite::Overlap => Err(AppError::Core(CoreError::Conflict(
            "Room is already booked for an overlapping time range".into(),
        ))),
        // Create never targets an existing row.
        BookingWrite::Missing => Err(AppError::InternalError(
            "booking insert reported a missing row".into(),
        )),
    }
}

/// GET /api/admin/bookings?search=&from=&to=
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<BookingListParams>,
) -> AppResult<Json<Envelope<Vec<BookingWithNames>>>> {
    let filter = BookingListFilter {
        from: params.from,
        to: params.to,
        search: params.search,
    };
    let bookings = BookingRepo::list_with_names(&state.pool, &filter).await?;
    Ok(Json(Envelope::ok(
        "Bookings retrieved successfully",
        bookings,
    )))
}

/// GET /api/admin/bookings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Booking>>> {
    let booking = BookingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }))?;
    Ok(Json(Envelope::ok("Booking fetched successfully", booking)))
}

/// PUT /api/admin/bookings/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<Envelope<Booking>>> {
    validate_interval(input.start_time, input.end_time)?;
    ensure_room_and_person_exist(&state, input.room_id, input.person_id).await?;
    ensure_user_exists(&state, input.updated_by).await?;

    let days = total_days(input.start_time, input.end_time);
    match BookingRepo::update(&state.pool, id, &input, days).await? {
        BookingWrite::Written(booking) => Ok(Json(Envelope::ok(
            "Room booking updated successfully",
            booking,
        ))),
        BookingWrite::Overlap => Err(AppError::Core(CoreError::Conflict(
            "Room is already booked for an overlapping time range".into(),
        ))),
        BookingWrite::Missing => Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        })),
    }
}

/// DELETE /api/admin/bookings/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = BookingRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Booking",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Booking deleted successfully", id)))
}

/// GET /api/admin/bookings/available-rooms?start=&end=
///
/// Rooms with no active booking overlapping the half-open `[start, end)`
/// interval; a booking ending exactly at `start` does not conflict.
pub async fn available_rooms(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<AvailabilityParams>,
) -> AppResult<Json<Envelope<Vec<AvailableRoom>>>> {
    validate_interval(params.start, params.end)
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid date range provided".into())))?;

    let rooms = BookingRepo::find_available_rooms(&state.pool, params.start, params.end).await?;
    if rooms.is_empty() {
        return Err(AppError::NotFound(
            "No available rooms found for the selected time range".into(),
        ));
    }
    Ok(Json(Envelope::ok(
        "Available rooms retrieved successfully",
        rooms,
    )))
}
