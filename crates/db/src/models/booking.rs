//! Room booking entity model, DTOs, and availability types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `bookings` table.
///
/// The interval is half-open `[start_time, end_time)`. Totals are stored as
/// supplied by the caller; `total_days` is derived from the interval.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub room_id: DbId,
    pub person_id: DbId,
    pub paid_items: serde_json::Value,
    pub free_items: serde_json::Value,
    pub total_paid_items_price: Option<f64>,
    pub total_free_items_price: Option<f64>,
    pub total_room_price: Option<f64>,
    pub grand_total: Option<f64>,
    pub total_days: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub remarks: Option<String>,
    pub is_approve: bool,
    pub approved_by: Option<DbId>,
    pub approved_time: Option<Timestamp>,
    pub is_active: bool,
    pub inactive_by: Option<DbId>,
    pub inactive_time: Option<Timestamp>,
    pub created_by: DbId,
    pub created_time: Timestamp,
    pub updated_by: Option<DbId>,
    pub updated_time: Option<Timestamp>,
}

/// DTO for creating a booking. Totals are accepted verbatim; `total_days`
/// is computed server-side from the interval.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub room_id: DbId,
    pub person_id: DbId,
    pub paid_items: Option<serde_json::Value>,
    pub free_items: Option<serde_json::Value>,
    pub total_paid_items_price: Option<f64>,
    pub total_free_items_price: Option<f64>,
    pub total_room_price: Option<f64>,
    pub grand_total: Option<f64>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub remarks: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a booking (full overwrite of mutable fields).
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateBooking {
    pub room_id: DbId,
    pub person_id: DbId,
    pub paid_items: Option<serde_json::Value>,
    pub free_items: Option<serde_json::Value>,
    pub total_paid_items_price: Option<f64>,
    pub total_free_items_price: Option<f64>,
    pub total_room_price: Option<f64>,
    pub grand_total: Option<f64>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub remarks: Option<String>,
    pub updated_by: DbId,
}

/// Outcome of a guarded booking write (create or update): the overlap probe
/// and the write run in one transaction under a per-room advisory lock.
#[derive(Debug)]
pub enum BookingWrite {
    Written(Booking),
    /// An active booking for the same room overlaps the requested interval.
    Overlap,
    /// The target booking does not exist or is inactive (update only).
    Missing,
}

/// Joined listing row: a booking with person/room/building/floor/category
/// names denormalized for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingWithNames {
    pub id: DbId,
    pub room_id: DbId,
    pub room_name: String,
    pub building_name: String,
    pub floor_name: String,
    pub category_name: String,
    pub person_id: DbId,
    pub person_name: String,
    pub paid_items: serde_json::Value,
    pub free_items: serde_json::Value,
    pub total_paid_items_price: Option<f64>,
    pub total_free_items_price: Option<f64>,
    pub total_room_price: Option<f64>,
    pub grand_total: Option<f64>,
    pub total_days: i32,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub remarks: Option<String>,
    pub is_approve: bool,
    pub created_by: DbId,
    pub created_time: Timestamp,
}

/// Filters for the joined booking listing.
#[derive(Debug, Clone, Default)]
pub struct BookingListFilter {
    /// Keep bookings whose interval starts at or after this instant.
    pub from: Option<Timestamp>,
    /// Keep bookings whose interval ends at or before this instant.
    pub to: Option<Timestamp>,
    /// Case-insensitive substring match across the denormalized
    /// person/room/building/floor/category names.
    pub search: Option<String>,
}

/// An available room with display attributes attached, as returned by the
/// availability search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailableRoom {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub remarks: Option<String>,
    pub category_id: DbId,
    pub category_name: String,
    pub floor_id: DbId,
    pub floor_name: String,
    pub building_id: DbId,
    pub building_name: String,
    pub has_details: bool,
    pub is_available: bool,
    pub person_capacity: Option<i32>,
    pub base_price: Option<String>,
}
