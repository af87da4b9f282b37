//! Repository for the `room_categories` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::room_category::{CreateRoomCategory, RoomCategory, UpdateRoomCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, base_price, person_capacity, remarks, \
    is_approve, approved_by, approved_time, is_active, inactive_by, inactive_time, \
    created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for room categories.
pub struct RoomCategoryRepo;

impl RoomCategoryRepo {
    /// Insert a new room category, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateRoomCategory,
    ) -> Result<RoomCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO room_categories (name, base_price, person_capacity, remarks, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(&input.name)
            .bind(&input.base_price)
            .bind(input.person_capacity)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active category already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM room_categories
             WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active category with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM room_categories WHERE id = $1 AND is_active)",
        )
        .bind(id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an active category by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoomCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_categories WHERE id = $1 AND is_active");
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active categories, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<RoomCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_categories WHERE is_active ORDER BY created_time DESC"
        );
        sqlx::query_as::<_, RoomCategory>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a category's mutable fields. Returns `None` if no active
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoomCategory,
    ) -> Result<Option<RoomCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE room_categories SET name = $2, base_price = $3, person_capacity = $4,
                    remarks = $5, updated_by = $6, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomCategory>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.base_price)
            .bind(input.person_capacity)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a category. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE room_categories SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
