//! Repository for the `floors` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::floor::{CreateFloor, Floor, UpdateFloor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, building_id, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for floors.
pub struct FloorRepo;

impl FloorRepo {
    /// Insert a new floor, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFloor) -> Result<Floor, sqlx::Error> {
        let query = format!(
            "INSERT INTO floors (name, building_id, remarks, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(&input.name)
            .bind(input.building_id)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active floor already uses this name within the same
    /// building (case-insensitive).
    pub async fn name_exists(
        pool: &PgPool,
        building_id: DbId,
        name: &str,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM floors
             WHERE building_id = $1 AND LOWER(name) = LOWER($2) AND is_active)",
        )
        .bind(building_id)
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active floor with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM floors WHERE id = $1 AND is_active)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Find an active floor by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an active floor's display name.
    pub async fn name_by_id(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT name FROM floors WHERE id = $1 AND is_active")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|r| r.0))
    }

    /// Batch-resolve display names for a set of ids.
    pub async fn names_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM floors WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List active floors, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Floor>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM floors WHERE is_active ORDER BY created_time DESC");
        sqlx::query_as::<_, Floor>(&query).fetch_all(pool).await
    }

    /// Overwrite a floor's mutable fields. Returns `None` if no active row
    /// with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFloor,
    ) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!(
            "UPDATE floors SET name = $2, building_id = $3, remarks = $4,
                    updated_by = $5, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.building_id)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a floor. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE floors SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
