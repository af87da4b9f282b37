//! Repository for the `bed_specs` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::bed_spec::{BedSpec, CreateBedSpec, UpdateBedSpec};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for bed specifications.
pub struct BedSpecRepo;

impl BedSpecRepo {
    /// Insert a new bed specification, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBedSpec) -> Result<BedSpec, sqlx::Error> {
        let query = format!(
            "INSERT INTO bed_specs (name, remarks, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BedSpec>(&query)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active bed spec already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM bed_specs WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active bed spec with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM bed_specs WHERE id = $1 AND is_active)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Find an active bed spec by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BedSpec>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bed_specs WHERE id = $1 AND is_active");
        sqlx::query_as::<_, BedSpec>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active bed specs, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BedSpec>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM bed_specs WHERE is_active ORDER BY created_time DESC");
        sqlx::query_as::<_, BedSpec>(&query).fetch_all(pool).await
    }

    /// Overwrite a bed spec's mutable fields. Returns `None` if no active
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBedSpec,
    ) -> Result<Option<BedSpec>, sqlx::Error> {
        let query = format!(
            "UPDATE bed_specs SET name = $2, remarks = $3, updated_by = $4, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BedSpec>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a bed spec. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bed_specs SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
