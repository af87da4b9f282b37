//! Repository for the `furnitures` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::furniture::{CreateFurniture, Furniture, UpdateFurniture};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for furniture items.
pub struct FurnitureRepo;

impl FurnitureRepo {
    /// Insert a new furniture item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFurniture) -> Result<Furniture, sqlx::Error> {
        let query = format!(
            "INSERT INTO furnitures (name, remarks, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Furniture>(&query)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active furniture item already uses this name
    /// (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM furnitures WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an active furniture item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Furniture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM furnitures WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Furniture>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch-resolve display names for a set of ids (active rows only).
    pub async fn names_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM furnitures WHERE id = ANY($1) AND is_active")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List active furniture items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Furniture>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM furnitures WHERE is_active ORDER BY created_time DESC");
        sqlx::query_as::<_, Furniture>(&query).fetch_all(pool).await
    }

    /// Overwrite a furniture item's mutable fields. Returns `None` if no
    /// active row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFurniture,
    ) -> Result<Option<Furniture>, sqlx::Error> {
        let query = format!(
            "UPDATE furnitures SET name = $2, remarks = $3, updated_by = $4, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Furniture>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a furniture item. Returns `true` if an active row was
    /// marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE furnitures SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
