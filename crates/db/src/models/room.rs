//! Room entity model, DTOs, and listing types.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub remarks: Option<String>,
    pub category_id: DbId,
    pub floor_id: DbId,
    pub building_id: DbId,
    /// Whether an active room-details record exists for this room.
    pub has_details: bool,
    pub is_available: bool,
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

/// DTO for creating a room.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub remarks: Option<String>,
    pub category_id: DbId,
    pub floor_id: DbId,
    pub building_id: DbId,
    pub created_by: DbId,
}

/// DTO for updating a room (full overwrite of mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub remarks: Option<String>,
    pub category_id: DbId,
    pub floor_id: DbId,
    pub building_id: DbId,
    pub updated_by: DbId,
}

/// Joined listing row: a room with its building/floor/category names
/// denormalized for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomWithNames {
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
    pub is_approve: bool,
    pub is_active: bool,
    pub created_by: DbId,
    pub created_time: Timestamp,
    pub updated_by: Option<DbId>,
    pub updated_time: Option<Timestamp>,
}

/// Allow-list of sortable fields for the joined room listing. Arbitrary
/// field names from the query string are never interpolated into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomSortField {
    RoomName,
    BuildingName,
    FloorName,
    CategoryName,
    #[default]
    CreatedTime,
}

impl RoomSortField {
    /// Parse a query-string value. Returns `None` for anything outside the
    /// allow-list.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "room_name" | "name" => Some(Self::RoomName),
            "building_name" => Some(Self::BuildingName),
            "floor_name" => Some(Self::FloorName),
            "category_name" => Some(Self::CategoryName),
            "created_time" => Some(Self::CreatedTime),
            _ => None,
        }
    }

    /// The ORDER BY expression this field maps to.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::RoomName => "r.name",
            Self::BuildingName => "b.name",
            Self::FloorName => "f.name",
            Self::CategoryName => "c.name",
            Self::CreatedTime => "r.created_time",
        }
    }
}

/// Sort direction for the joined room listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Filters and pagination for the joined room listing.
#[derive(Debug, Clone, Default)]
pub struct RoomListFilter {
    /// Case-insensitive substring match on the room name.
    pub name: Option<String>,
    pub building_id: Option<DbId>,
    /// Case-insensitive substring match on the building name.
    pub building_name: Option<String>,
    /// Case-insensitive substring match on the floor name.
    pub floor_name: Option<String>,
    pub sort_by: RoomSortField,
    pub sort_order: SortOrder,
    /// 1-based page number.
    pub page: i64,
    pub page_size: i64,
}
