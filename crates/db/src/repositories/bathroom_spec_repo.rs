//! Repository for the `bathroom_specs` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::bathroom_spec::{BathroomSpec, CreateBathroomSpec, UpdateBathroomSpec};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for bathroom specifications.
pub struct BathroomSpecRepo;

impl BathroomSpecRepo {
    /// Insert a new bathroom specification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBathroomSpec,
    ) -> Result<BathroomSpec, sqlx::Error> {
        let query = format!(
            "INSERT INTO bathroom_specs (name, remarks, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BathroomSpec>(&query)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active bathroom spec already uses this name
    /// (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bathroom_specs
             WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an active bathroom spec by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BathroomSpec>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bathroom_specs WHERE id = $1 AND is_active");
        sqlx::query_as::<_, BathroomSpec>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch-resolve display names for a set of ids (active rows only).
    pub async fn names_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM bathroom_specs WHERE id = ANY($1) AND is_active")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List active bathroom specs, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BathroomSpec>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM bathroom_specs WHERE is_active ORDER BY created_time DESC"
        );
        sqlx::query_as::<_, BathroomSpec>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a bathroom spec's mutable fields. Returns `None` if no
    /// active row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBathroomSpec,
    ) -> Result<Option<BathroomSpec>, sqlx::Error> {
        let query = format!(
            "UPDATE bathroom_specs SET name = $2, remarks = $3, updated_by = $4, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BathroomSpec>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a bathroom spec. Returns `true` if an active row was
    /// marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bathroom_specs SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
