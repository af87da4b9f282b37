//! Furniture entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `furnitures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Furniture {
    pub id: DbId,
    pub name: String,
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

/// DTO for creating a furniture item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFurniture {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub remarks: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a furniture item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateFurniture {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub remarks: Option<String>,
    pub updated_by: DbId,
}
