//! Repository for the `bookings` table and the room availability search.
//!
//! Booking writes are guarded: the overlap probe and the insert/update run
//! in one transaction holding a per-room advisory lock
//! (`pg_advisory_xact_lock`), so two concurrent writes for the same room
//! serialize and the loser sees the winner's interval.

use sqlx::{PgPool, Postgres, Transaction};

use dormhub_core::types::{DbId, Timestamp};

use crate::models::booking::{
    AvailableRoom, Booking, BookingListFilter, BookingWithNames, BookingWrite, CreateBooking,
    UpdateBooking,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_id, person_id, paid_items, free_items, \
    total_paid_items_price, total_free_items_price, total_room_price, grand_total, \
    total_days, start_time, end_time, remarks, is_approve, approved_by, approved_time, \
    is_active, inactive_by, inactive_time, created_by, created_time, updated_by, updated_time";

/// Provides CRUD operations and the availability search for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking unless an active booking for the same room overlaps
    /// the requested half-open interval.
    pub async fn create(
        pool: &PgPool,
        input: &CreateBooking,
        total_days: i32,
    ) -> Result<BookingWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        lock_room(&mut tx, input.room_id).await?;
        if overlap_exists(&mut tx, input.room_id, input.start_time, input.end_time, None).await? {
            tx.rollback().await?;
            return Ok(BookingWrite::Overlap);
        }

        let insert = format!(
            "INSERT INTO bookings
                (room_id, person_id, paid_items, free_items,
                 total_paid_items_price, total_free_items_price, total_room_price, grand_total,
                 total_days, start_time, end_time, remarks, created_by)
             VALUES ($1, $2, COALESCE($3, '[]'::jsonb), COALESCE($4, '[]'::jsonb),
                     $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&insert)
            .bind(input.room_id)
            .bind(input.person_id)
            .bind(&input.paid_items)
            .bind(&input.free_items)
            .bind(input.total_paid_items_price)
            .bind(input.total_free_items_price)
            .bind(input.total_room_price)
            .bind(input.grand_total)
            .bind(total_days)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.remarks)
            .bind(input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(BookingWrite::Written(booking))
    }

    /// Overwrite a booking's mutable fields under the same overlap guard,
    /// excluding the booking itself from the probe.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBooking,
        total_days: i32,
    ) -> Result<BookingWrite, sqlx::Error> {
        let mut tx = pool.begin().await?;

        lock_room(&mut tx, input.room_id).await?;
        if overlap_exists(
            &mut tx,
            input.room_id,
            input.start_time,
            input.end_time,
            Some(id),
        )
        .await?
        {
            tx.rollback().await?;
            return Ok(BookingWrite::Overlap);
        }

        let update = format!(
            "UPDATE bookings SET room_id = $2, person_id = $3,
                    paid_items = COALESCE($4, '[]'::jsonb),
                    free_items = COALESCE($5, '[]'::jsonb),
                    total_paid_items_price = $6, total_free_items_price = $7,
                    total_room_price = $8, grand_total = $9, total_days = $10,
                    start_time = $11, end_time = $12, remarks = $13,
                    updated_by = $14, updated_time = NOW()
             WHERE id = $1 AND is_active
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Booking>(&update)
            .bind(id)
            .bind(input.room_id)
            .bind(input.person_id)
            .bind(&input.paid_items)
            .bind(&input.free_items)
            .bind(input.total_paid_items_price)
            .bind(input.total_free_items_price)
            .bind(input.total_room_price)
            .bind(input.grand_total)
            .bind(total_days)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(&input.remarks)
            .bind(input.updated_by)
            .fetch_optional(&mut *tx)
            .await?;

        match updated {
            Some(booking) => {
                tx.commit().await?;
                Ok(BookingWrite::Written(booking))
            }
            None => {
                tx.rollback().await?;
                Ok(BookingWrite::Missing)
            }
        }
    }

    /// Find an active booking by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 AND is_active");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a booking by id regardless of the active flag.
    pub async fn find_any_by_id(pool: &PgPool, id: DbId) -> Result<Option<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Joined listing: active bookings with person/room/building/floor/
    /// category names attached in a single query (no per-row lookups).
    pub async fn list_with_names(
        pool: &PgPool,
        filter: &BookingListFilter,
    ) -> Result<Vec<BookingWithNames>, sqlx::Error> {
        let query = "SELECT bk.id, bk.room_id, r.name AS room_name,
                    b.name AS building_name, f.name AS floor_name, c.name AS category_name,
                    bk.person_id, p.name AS person_name,
                    bk.paid_items, bk.free_items,
                    bk.total_paid_items_price, bk.total_free_items_price,
                    bk.total_room_price, bk.grand_total, bk.total_days,
                    bk.start_time, bk.end_time, bk.remarks, bk.is_approve,
                    bk.created_by, bk.created_time
             FROM bookings bk
             JOIN persons p ON p.id = bk.person_id
             JOIN rooms r ON r.id = bk.room_id
             JOIN buildings b ON b.id = r.building_id
             JOIN floors f ON f.id = r.floor_id
             JOIN room_categories c ON c.id = r.category_id
             WHERE bk.is_active
               AND ($1::timestamptz IS NULL OR bk.start_time >= $1)
               AND ($2::timestamptz IS NULL OR bk.end_time <= $2)
               AND ($3::text IS NULL
                    OR p.name ILIKE '%' || $3 || '%'
                    OR r.name ILIKE '%' || $3 || '%'
                    OR b.name ILIKE '%' || $3 || '%'
                    OR f.name ILIKE '%' || $3 || '%'
                    OR c.name ILIKE '%' || $3 || '%')
             ORDER BY bk.created_time DESC";
        sqlx::query_as::<_, BookingWithNames>(query)
            .bind(filter.from)
            .bind(filter.to)
            .bind(&filter.search)
            .fetch_all(pool)
            .await
    }

    /// Soft-delete a booking. Returns `true` if an active row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId, actor: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE bookings SET is_active = FALSE, inactive_by = $2, inactive_time = NOW()
             WHERE id = $1 AND is_active",
        )
        .bind(id)
        .bind(actor)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Rooms free in the half-open interval `[start, end)`: active rooms
    /// flagged available with no active booking whose interval overlaps,
    /// with floor/building/category display attributes attached.
    pub async fn find_available_rooms(
        pool: &PgPool,
        start: Timestamp,
        end: Timestamp,
    ) -> Result<Vec<AvailableRoom>, sqlx::Error> {
        let query = "SELECT r.id, r.name, r.description, r.remarks,
                    r.category_id, c.name AS category_name,
                    r.floor_id, f.name AS floor_name,
                    r.building_id, b.name AS building_name,
                    r.has_details, r.is_available,
                    c.person_capacity, c.base_price
             FROM rooms r
             JOIN floors f ON f.id = r.floor_id
             JOIN buildings b ON b.id = r.building_id
             JOIN room_categories c ON c.id = r.category_id
             WHERE r.is_active
               AND r.is_available
               AND NOT EXISTS (
                   SELECT 1 FROM bookings bk
                   WHERE bk.room_id = r.id
                     AND bk.is_active
                     AND bk.start_time < $2
                     AND $1 < bk.end_time)
             ORDER BY r.name";
        sqlx::query_as::<_, AvailableRoom>(query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }
}

/// Serialize booking writes per room for the rest of the transaction.
async fn lock_room(tx: &mut Transaction<'_, Postgres>, room_id: DbId) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(room_id)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Half-open overlap probe against active bookings for a room, optionally
/// excluding one booking id (for updates).
async fn overlap_exists(
    tx: &mut Transaction<'_, Postgres>,
    room_id: DbId,
    start: Timestamp,
    end: Timestamp,
    exclude: Option<DbId>,
) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as(
        "SELECT EXISTS(SELECT 1 FROM bookings
         WHERE room_id = $1 AND is_active
           AND start_time < $3 AND $2 < end_time
           AND ($4::bigint IS NULL OR id <> $4))",
    )
    .bind(room_id)
    .bind(start)
    .bind(end)
    .bind(exclude)
    .fetch_one(&mut **tx)
    .await?;
    Ok(row.0)
}
