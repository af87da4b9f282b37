//! Room details (one-to-one room enrichment) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `room_details` table.
///
/// At most one active row may exist per (room, floor, building) triple;
/// that is enforced by a write-time probe, not a database constraint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomDetails {
    pub id: DbId,
    pub room_id: DbId,
    pub floor_id: DbId,
    pub building_id: DbId,
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    pub common_feature_ids: Vec<DbId>,
    pub furniture_ids: Vec<DbId>,
    pub bathroom_spec_ids: Vec<DbId>,
    /// Stored file names; the public path prefix is added at read time.
    pub image_paths: Vec<String>,
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

/// Request DTO for creating a room-details record. `images` entries are
/// inline data-URI payloads; the repository receives the stored file names
/// via [`NewRoomDetails`] after the api layer has written them to disk.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomDetails {
    #[validate(range(min = 1))]
    pub room_id: DbId,
    #[validate(range(min = 1))]
    pub floor_id: DbId,
    #[validate(range(min = 1))]
    pub building_id: DbId,
    #[validate(length(min = 1, message = "dimension must not be empty"))]
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    #[serde(default)]
    pub common_feature_ids: Vec<DbId>,
    #[serde(default)]
    pub furniture_ids: Vec<DbId>,
    #[serde(default)]
    pub bathroom_spec_ids: Vec<DbId>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_by: DbId,
}

/// Request DTO for updating a room-details record. Each `images` entry is
/// either a new inline data-URI payload or an existing stored file name.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoomDetails {
    #[validate(length(min = 1, message = "dimension must not be empty"))]
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    #[serde(default)]
    pub common_feature_ids: Vec<DbId>,
    #[serde(default)]
    pub furniture_ids: Vec<DbId>,
    #[serde(default)]
    pub bathroom_spec_ids: Vec<DbId>,
    #[serde(default)]
    pub images: Vec<String>,
    pub updated_by: DbId,
}

/// Insert payload handed to the repository once image payloads have been
/// persisted to disk and replaced by their stored file names.
#[derive(Debug, Clone)]
pub struct NewRoomDetails {
    pub room_id: DbId,
    pub floor_id: DbId,
    pub building_id: DbId,
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    pub common_feature_ids: Vec<DbId>,
    pub furniture_ids: Vec<DbId>,
    pub bathroom_spec_ids: Vec<DbId>,
    pub image_paths: Vec<String>,
    pub created_by: DbId,
}

/// Update payload with stored file names resolved.
#[derive(Debug, Clone)]
pub struct RoomDetailsChanges {
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    pub common_feature_ids: Vec<DbId>,
    pub furniture_ids: Vec<DbId>,
    pub bathroom_spec_ids: Vec<DbId>,
    pub image_paths: Vec<String>,
    pub updated_by: DbId,
}
