//! Repository for the `paid_items` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::paid_item::{CreatePaidItem, PaidItem, UpdatePaidItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, price, price_calculation_mode, remarks, \
    is_approve, approved_by, approved_time, is_active, inactive_by, inactive_time, \
    created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for billable items.
pub struct PaidItemRepo;

impl PaidItemRepo {
    /// Insert a new paid item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePaidItem) -> Result<PaidItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO paid_items (name, price, price_calculation_mode, remarks, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaidItem>(&query)
            .bind(&input.name)
            .bind(&input.price)
            .bind(input.price_calculation_mode)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active paid item already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM paid_items WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an active paid item by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PaidItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM paid_items WHERE id = $1 AND is_active");
        sqlx::query_as::<_, PaidItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List active paid items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<PaidItem>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM paid_items WHERE is_active ORDER BY created_time DESC");
        sqlx::query_as::<_, PaidItem>(&query).fetch_all(pool).await
    }

    /// Overwrite a paid item's mutable fields. Returns `None` if no active
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePaidItem,
    ) -> Result<Option<PaidItem>, sqlx::Error> {
        let query = format!(
            "UPDATE paid_items SET name = $2, price = $3, price_calculation_mode = $4,
                    remarks = $5, updated_by = $6, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PaidItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.price)
            .bind(input.price_calculation_mode)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a paid item. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE paid_items SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
