//! Person (tenant/guest) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `persons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub company_name: String,
    pub personal_phone: String,
    pub company_phone: String,
    pub email: String,
    /// National id, birth certificate, or passport number.
    pub legal_id: String,
    pub country: String,
    pub address: Option<String>,
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

/// DTO for registering a person.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePerson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "personal_phone must not be empty"))]
    pub personal_phone: String,
    #[validate(length(min = 1, message = "company_phone must not be empty"))]
    pub company_phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "legal_id must not be empty"))]
    pub legal_id: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    pub address: Option<String>,
    pub created_by: DbId,
}

/// DTO for updating a person (full overwrite of mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePerson {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "company_name must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "personal_phone must not be empty"))]
    pub personal_phone: String,
    #[validate(length(min = 1, message = "company_phone must not be empty"))]
    pub company_phone: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(min = 1, message = "legal_id must not be empty"))]
    pub legal_id: String,
    #[validate(length(min = 1, message = "country must not be empty"))]
    pub country: String,
    pub address: Option<String>,
    pub updated_by: DbId,
}
