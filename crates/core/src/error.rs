use crate::types::DbId;

/// Domain-level error taxonomy shared across the workspace.
///
/// Every endpoint resolves its failures into one of these variants before
/// responding; the `api` crate maps them onto HTTP status codes
/// (400 / 404 / 409 / 401 / 403 / 500).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist, or the id points to an inactive row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A uniqueness probe found an existing row.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Unexpected internal failure. The message is logged, never surfaced.
    #[error("Internal error: {0}")]
    Internal(String),
}
