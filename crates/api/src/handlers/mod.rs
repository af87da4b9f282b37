//! HTTP handlers, one module per resource.
//!
//! Shared contract: every mutation resolves its actor id against the users
//! table (404 on a miss), create paths probe uniqueness among active rows
//! (409 on a hit), and all reads return active rows only.

pub mod auth;
pub mod bathroom_spec;
pub mod bed_spec;
pub mod booking;
pub mod building;
pub mod common_feature;
pub mod floor;
pub mod furniture;
pub mod paid_item;
pub mod person;
pub mod room;
pub mod room_category;
pub mod room_details;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Resolve an actor id (`created_by` / `updated_by` / `inactive_by`)
/// against the users table.
pub(crate) async fn ensure_user_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if UserRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "User", id }))
    }
}
