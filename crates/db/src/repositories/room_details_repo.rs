//! Repository for the `room_details` table.
//!
//! Creating or soft-deleting a details record also flips the parent room's
//! `has_details` flag; both writes happen in one transaction so the flag can
//! never disagree with the details row.

use sqlx::PgPool;

use dormhub_core::types::DbId;

use crate::models::room_details::{NewRoomDetails, RoomDetails, RoomDetailsChanges};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, floor_id, building_id, dimension, side_id, balcony_id, \
    attached_bathroom_id, bed_spec_id, common_feature_ids, furniture_ids, bathroom_spec_ids, \
    image_paths, is_approve, approved_by, approved_time, is_active, inactive_by, inactive_time, \
    created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations for room details.
pub struct RoomDetailsRepo;

impl RoomDetailsRepo {
    /// True if an active details record exists for the given
    /// (room, floor, building) triple.
    pub async fn exists_for_triple(
        pool: &PgPool,
        room_id: DbId,
        floor_id: DbId,
        building_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM room_details
             WHERE room_id = $1 AND floor_id = $2 AND building_id = $3 AND is_active)",
        )
        .bind(room_id)
        .bind(floor_id)
        .bind(building_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }

    /// Insert a details record and set the parent room's `has_details` flag
    /// in one transaction.
    ///
    /// Returns `None` (and rolls back) if the parent room is missing or
    /// inactive.
    pub async fn create(
        pool: &PgPool,
        input: &NewRoomDetails,
    ) -> Result<Option<RoomDetails>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO room_details
                (room_id, floor_id, building_id, dimension, side_id, balcony_id,
                 attached_bathroom_id, bed_spec_id, common_feature_ids, furniture_ids,
                 bathroom_spec_ids, image_paths, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let details = sqlx::query_as::<_, RoomDetails>(&insert)
            .bind(input.room_id)
            .bind(input.floor_id)
            .bind(input.building_id)
            .bind(&input.dimension)
            .bind(input.side_id)
            .bind(input.balcony_id)
            .bind(input.attached_bathroom_id)
            .bind(input.bed_spec_id)
            .bind(&input.common_feature_ids)
            .bind(&input.furniture_ids)
            .bind(&input.bathroom_spec_ids)
            .bind(&input.image_paths)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        let flagged = sqlx::query(
            "UPDATE rooms SET has_details = TRUE WHERE id = $1 AND is_active",
        )
        .bind(input.room_id)
        .execute(&mut *tx)
        .await?;

        if flagged.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        tx.commit().await?;
        Ok(Some(details))
    }

    /// Find an active details record by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<RoomDetails>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM room_details WHERE id = $1 AND is_active");
        sqlx::query_as::<_, RoomDetails>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all active details records, most recently created first.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<RoomDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_details WHERE is_active ORDER BY created_time DESC"
        );
        sqlx::query_as::<_, RoomDetails>(&query)
            .fetch_all(pool)
            .await
    }

    /// Active details records matching a (building, floor, room) triple.
    pub async fn find_by_criteria(
        pool: &PgPool,
        building_id: DbId,
        floor_id: DbId,
        room_id: DbId,
    ) -> Result<Vec<RoomDetails>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM room_details
             WHERE building_id = $1 AND floor_id = $2 AND room_id = $3 AND is_active"
        );
        sqlx::query_as::<_, RoomDetails>(&query)
            .bind(building_id)
            .bind(floor_id)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a details record's mutable fields. Returns `None` if no
    /// active row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &RoomDetailsChanges,
    ) -> Result<Option<RoomDetails>, sqlx::Error> {
        let query = format!(
            "UPDATE room_details SET dimension = $2, side_id = $3, balcony_id = $4,
                    attached_bathroom_id = $5, bed_spec_id = $6, common_feature_ids = $7,
                    furniture_ids = $8, bathroom_spec_ids = $9, image_paths = $10,
                    updated_by = $11, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RoomDetails>(&query)
            .bind(id)
            .bind(&input.dimension)
            .bind(input.side_id)
            .bind(input.balcony_id)
            .bind(input.attached_bathroom_id)
            .bind(input.bed_spec_id)
            .bind(&input.common_feature_ids)
            .bind(&input.furniture_ids)
            .bind(&input.bathroom_spec_ids)
            .bind(&input.image_paths)
            .bind(input.updated_by)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a details record and clear the parent room's
    /// `has_details` flag in one transaction.
    ///
    /// Returns `false` if no active details row with the given id exists.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let room_id: Option<(DbId,)> = sqlx::query_as(
            "UPDATE room_details SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING room_id",
        )
        .bind(id)
        .bind(actor)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((room_id,)) = room_id else {
            tx.rollback().await?;
            return Ok(false);
        };

        sqlx::query("UPDATE rooms SET has_details = FALSE WHERE id = $1 AND is_active")
            .bind(room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(true)
    }
}
