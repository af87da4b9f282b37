//! Repository for the `common_features` table.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::common_feature::{CommonFeature, CreateCommonFeature, UpdateCommonFeature};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for common features.
pub struct CommonFeatureRepo;

impl CommonFeatureRepo {
    /// Insert a new common feature, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommonFeature,
    ) -> Result<CommonFeature, sqlx::Error> {
        let query = format!(
            "INSERT INTO common_features (name, remarks, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommonFeature>(&query)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active feature already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM common_features
             WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Find an active feature by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CommonFeature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM common_features WHERE id = $1 AND is_active");
        sqlx::query_as::<_, CommonFeature>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Batch-resolve display names for a set of ids (active rows only).
    pub async fn names_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<(DbId, String)>, sqlx::Error> {
        sqlx::query_as("SELECT id, name FROM common_features WHERE id = ANY($1) AND is_active")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// List active features, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CommonFeature>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM common_features WHERE is_active ORDER BY created_time DESC"
        );
        sqlx::query_as::<_, CommonFeature>(&query)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a feature's mutable fields. Returns `None` if no active
    /// row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCommonFeature,
    ) -> Result<Option<CommonFeature>, sqlx::Error> {
        let query = format!(
            "UPDATE common_features SET name = $2, remarks = $3, updated_by = $4, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommonFeature>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a feature. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE common_features SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
