//! Shared audit-envelope DTOs.

use serde::Deserialize;

use dormhub_core::types::DbId;

/// DELETE request body: every soft delete carries the deactivating actor.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteActor {
    pub inactive_by: DbId,
}
