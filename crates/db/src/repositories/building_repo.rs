//! Repository for the `buildings` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::building::{Building, CreateBuilding, UpdateBuilding};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for buildings.
pub struct BuildingRepo;

impl BuildingRepo {
    /// Insert a new building, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> Result<Building, sqlx::Error> {
        let query = format!(
            "INSERT INTO buildings (name, remarks, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active building already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM buildings WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active building with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM buildings WHERE id = $1 AND is_active)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Find an active building by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a building by id regardless of the active flag. Soft delete
    /// preserves the row, so history stays reachable.
    pub async fn find_any_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an active building's display name.
    pub async fn name_by_id(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT name FROM buildings WHERE id = $1 AND is_active")
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
        sqlx::query_as("SELECT id, name FROM buildings WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List active buildings, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Building>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM buildings WHERE is_active ORDER BY created_time DESC");
        sqlx::query_as::<_, Building>(&query).fetch_all(pool).await
    }

    /// Overwrite a building's mutable fields. Returns `None` if no active
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!(
            "UPDATE buildings SET name = $2, remarks = $3, updated_by = $4, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a building. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE buildings SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
