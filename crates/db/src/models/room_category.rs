//! Room category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `room_categories` table.
///
/// `base_price` stays string-typed; the server never does arithmetic on it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomCategory {
    pub id: DbId,
    pub name: String,
    pub base_price: Option<String>,
    pub person_capacity: Option<i32>,
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

/// DTO for creating a room category.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomCategory {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub base_price: Option<String>,
    pub person_capacity: Option<i32>,
    pub remarks: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a room category (full overwrite of mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomCategory {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub base_price: Option<String>,
    pub person_capacity: Option<i32>,
    pub remarks: Option<String>,
    pub updated_by: DbId,
}
