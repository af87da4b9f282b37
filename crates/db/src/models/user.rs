//! User account entity model and DTOs.
//!
//! Users are the authentication collaborator: they log in and are referenced
//! as actor ids on every domain mutation. They do not carry the domain audit
//! envelope.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use dormhub_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user account.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    /// Defaults to `"admin"` if omitted.
    pub role: Option<String>,
}
