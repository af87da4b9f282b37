//! Billable item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `paid_items` table.
///
/// `price` stays string-typed; booking totals are caller-supplied and the
/// server never computes on item prices.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PaidItem {
    pub id: DbId,
    pub name: String,
    pub price: String,
    pub price_calculation_mode: i32,
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

/// DTO for creating a paid item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePaidItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: String,
    pub price_calculation_mode: i32,
    pub remarks: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a paid item.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePaidItem {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "price must not be empty"))]
    pub price: String,
    pub price_calculation_mode: i32,
    pub remarks: Option<String>,
    pub updated_by: DbId,
}
