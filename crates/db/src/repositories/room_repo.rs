//! Repository for the `rooms` table, including the joined, filtered,
//! paginated listing.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::room::{CreateRoom, Room, RoomListFilter, RoomWithNames, UpdateRoom};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, remarks, category_id, floor_id, building_id, \
    has_details, is_available, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Shared WHERE clause for the joined listing; the count query and the page
/// query must stay in lockstep or `total_pages` lies.
const LIST_FILTER: &str = "r.is_active
      AND ($1::text IS NULL OR r.name ILIKE '%' || $1 || '%')
      AND ($2::bigint IS NULL OR r.building_id = $2)
      AND ($3::text IS NULL OR b.name ILIKE '%' || $3 || '%')
      AND ($4::text IS NULL OR f.name ILIKE '%' || $4 || '%')";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row. New rooms start with
    /// `has_details = false` and `is_available = true`.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms (name, description, remarks, category_id, floor_id, building_id, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.remarks)
            .bind(input.category_id)
            .bind(input.floor_id)
            .bind(input.building_id)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// True if an active room already uses this name (case-insensitive).
    pub async fn name_exists(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM rooms WHERE LOWER(name) = LOWER($1) AND is_active)",
        )
        .bind(name)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// True if an active room with the given id exists.
    pub async fn exists_active(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM rooms WHERE id = $1 AND is_active)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Find an active room by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a room by id regardless of the active flag.
    pub async fn find_any_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Resolve an active room's display name.
    pub async fn name_by_id(pool: &PgPool, id: DbId) -> Result<Option<String>, sqlx::Error> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT name FROM rooms WHERE id = $1 AND is_active")
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
        sqlx::query_as("SELECT id, name FROM rooms WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Joined listing: active rooms with building/floor/category names,
    /// optional filters, allow-listed sorting, and pagination.
    ///
    /// Returns the page of rows plus the total row count before pagination.
    pub async fn list_with_names(
        pool: &PgPool,
        filter: &RoomListFilter,
    ) -> Result<(Vec<RoomWithNames>, i64), sqlx::Error> {
        let count_query = format!(
            "SELECT COUNT(*)
             FROM rooms r
             JOIN buildings b ON b.id = r.building_id
             JOIN floors f ON f.id = r.floor_id
             JOIN room_categories c ON c.id = r.category_id
             WHERE {LIST_FILTER}"
        );
        let total: (i64,) = sqlx::query_as(&count_query)
            .bind(&filter.name)
            .bind(filter.building_id)
            .bind(&filter.building_name)
            .bind(&filter.floor_name)
            .fetch_one(pool)
            .await?;

        // sort_by/sort_order come from a fixed allow-list, never raw input.
        let page_query = format!(
            "SELECT r.id, r.name, r.description, r.remarks,
                    r.category_id, c.name AS category_name,
                    r.floor_id, f.name AS floor_name,
                    r.building_id, b.name AS building_name,
                    r.has_details, r.is_available, r.is_approve, r.is_active,
                    r.created_by, r.created_time, r.updated_by, r.updated_time
             FROM rooms r
             JOIN buildings b ON b.id = r.building_id
             JOIN floors f ON f.id = r.floor_id
             JOIN room_categories c ON c.id = r.category_id
             WHERE {LIST_FILTER}
             ORDER BY {} {}
             LIMIT $5 OFFSET $6",
            filter.sort_by.as_sql(),
            filter.sort_order.as_sql(),
        );
        let offset = (filter.page - 1) * filter.page_size;
        let rows = sqlx::query_as::<_, RoomWithNames>(&page_query)
            .bind(&filter.name)
            .bind(filter.building_id)
            .bind(&filter.building_name)
            .bind(&filter.floor_name)
            .bind(filter.page_size)
            .bind(offset)
            .fetch_all(pool)
            .await?;

        Ok((rows, total.0))
    }

    /// Overwrite a room's mutable fields. Returns `None` if no active row
    /// with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET name = $2, description = $3, remarks = $4, category_id = $5,
                    floor_id = $6, building_id = $7, updated_by = $8, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.remarks)
            .bind(input.category_id)
            .bind(input.floor_id)
            .bind(input.building_id)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a room. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE rooms SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
