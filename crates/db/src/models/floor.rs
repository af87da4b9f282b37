//! Floor entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `floors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Floor {
    pub id: DbId,
    pub name: String,
    pub building_id: DbId,
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

/// DTO for creating a floor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFloor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub building_id: DbId,
    pub remarks: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a floor (full overwrite of mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFloor {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub building_id: DbId,
    pub remarks: Option<String>,
    pub updated_by: DbId,
}
