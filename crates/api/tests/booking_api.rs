//! Booking engine tests: interval validation, overlap conflicts, the
//! availability search with half-open semantics, and the joined listing.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, delete_json, get, post_json, put_json, seed_user};
use sqlx::PgPool;

/// Seed a building/floor/category plus one person; returns
/// (category_id, floor_id, building_id, person_id).
async fn seed_refs(pool: &PgPool, token: &str, actor: i64) -> (i64, i64, i64, i64) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/buildings",
        token,
        serde_json::json!({"name": "Block A", "created_by": actor}),
    )
    .await;
    let building_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/floors",
        token,
        serde_json::json!({"name": "1st Floor", "building_id": building_id, "created_by": actor}),
    )
    .await;
    let floor_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/room-categories",
        token,
        serde_json::json!({
            "name": "Standard", "base_price": "800", "person_capacity": 2, "created_by": actor
        }),
    )
    .await;
    let category_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/persons",
        token,
        serde_json::json!({
            "name": "Rahim Uddin",
            "company_name": "Acme Textiles",
            "personal_phone": "555-0101",
            "company_phone": "555-0100",
            "email": "rahim@acme.test",
            "legal_id": "P-1234567",
            "country": "Bangladesh",
            "created_by": actor
        }),
    )
    .await;
    let person_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    (category_id, floor_id, building_id, person_id)
}

async fn create_room(
    pool: &PgPool,
    token: &str,
    actor: i64,
    name: &str,
    refs: (i64, i64, i64, i64),
) -> i64 {
    let (category_id, floor_id, building_id, _) = refs;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/rooms",
        token,
        serde_json::json!({
            "name": name,
            "category_id": category_id,
            "floor_id": floor_id,
            "building_id": building_id,
            "created_by": actor
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

fn booking_payload(
    actor: i64,
    room_id: i64,
    person_id: i64,
    start: &str,
    end: &str,
) -> serde_json::Value {
    serde_json::json!({
        "room_id": room_id,
        "person_id": person_id,
        "paid_items": [{"name": "Laundry", "price": "120.50", "quantity": 1}],
        "free_items": [],
        "total_paid_items_price": 120.5,
        "total_free_items_price": 0.0,
        "total_room_price": 4000.0,
        "grand_total": 4120.5,
        "start_time": start,
        "end_time": end,
        "remarks": "integration test",
        "created_by": actor
    })
}

async fn create_booking(
    pool: &PgPool,
    token: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/admin/bookings", token, payload).await;
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_booking_computes_total_days(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, json) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["total_days"], 5);
    // Caller-supplied totals are stored verbatim.
    assert_eq!(json["data"]["grand_total"], 4120.5);
    assert_eq!(json["data"]["is_approve"], false);
    assert_eq!(json["data"]["is_active"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_degenerate_interval_returns_400(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-10T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-15T00:00:00Z",
            "2024-01-10T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_room_or_person_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            99_999,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            99_999,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_overlapping_booking_returns_409(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Overlapping interval on the same room conflicts.
    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-12T00:00:00Z",
            "2024-01-20T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Back-to-back: starting exactly at the previous end is allowed.
    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-15T00:00:00Z",
            "2024-01-18T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_excludes_overlapping_room(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let r1 = create_room(&pool, &token, user.id, "R1", refs).await;
    let r2 = create_room(&pool, &token, user.id, "R2", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            r1,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // Query overlapping R1's booking: only R2 is free.
    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        "/api/admin/bookings/available-rooms?start=2024-01-12T00:00:00Z&end=2024-01-20T00:00:00Z",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(!ids.contains(&r1));
    assert!(ids.contains(&r2));

    // Display attributes ride along.
    let room = &json["data"][0];
    assert_eq!(room["building_name"], "Block A");
    assert_eq!(room["category_name"], "Standard");
    assert_eq!(room["person_capacity"], 2);
    assert_eq!(room["base_price"], "800");

    // Touching boundary: a query starting at the booking's end includes R1.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/admin/bookings/available-rooms?start=2024-01-15T00:00:00Z&end=2024-01-20T00:00:00Z",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&r1));
    assert!(ids.contains(&r2));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_invalid_range_returns_400(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/admin/bookings/available-rooms?start=2024-01-20T00:00:00Z&end=2024-01-10T00:00:00Z",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_availability_with_no_free_rooms_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let r1 = create_room(&pool, &token, user.id, "R1", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            r1,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/admin/bookings/available-rooms?start=2024-01-12T00:00:00Z&end=2024-01-13T00:00:00Z",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_booking_frees_the_room(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "R1", refs).await;

    let (status, json) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let booking_id = json["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete_json(
        app,
        &format!("/api/admin/bookings/{booking_id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The interval no longer blocks the room.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/admin/bookings/available-rooms?start=2024-01-12T00:00:00Z&end=2024-01-13T00:00:00Z",
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_joins_names_and_filters_by_search(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/admin/bookings", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let record = &json["data"][0];
    assert_eq!(record["room_name"], "A-101");
    assert_eq!(record["person_name"], "Rahim Uddin");
    assert_eq!(record["building_name"], "Block A");
    assert_eq!(record["category_name"], "Standard");

    // Substring match against a denormalized name.
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/admin/bookings?search=rahim", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/bookings?search=nomatch", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_booking_revalidates_and_recomputes(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, json) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json["data"]["id"].as_i64().unwrap();

    let mut payload = booking_payload(
        user.id,
        room,
        refs.3,
        "2024-02-01T00:00:00Z",
        "2024-02-04T00:00:00Z",
    );
    payload["updated_by"] = serde_json::json!(user.id);
    let app = common::build_test_app(pool.clone());
    let response = put_json(app, &format!("/api/admin/bookings/{id}"), &token, payload).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_days"], 3);

    // Updating a nonexistent booking is a 404.
    let mut payload = booking_payload(
        user.id,
        room,
        refs.3,
        "2024-03-01T00:00:00Z",
        "2024-03-04T00:00:00Z",
    );
    payload["updated_by"] = serde_json::json!(user.id);
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/admin/bookings/999999", &token, payload).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_into_overlap_returns_409(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_refs(&pool, &token, user.id).await;
    let room = create_room(&pool, &token, user.id, "A-101", refs).await;

    let (status, _) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-10T00:00:00Z",
            "2024-01-15T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, json) = create_booking(
        &pool,
        &token,
        booking_payload(
            user.id,
            room,
            refs.3,
            "2024-01-20T00:00:00Z",
            "2024-01-25T00:00:00Z",
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let second = json["data"]["id"].as_i64().unwrap();

    // Moving the second booking onto the first conflicts.
    let mut payload = booking_payload(
        user.id,
        room,
        refs.3,
        "2024-01-12T00:00:00Z",
        "2024-01-14T00:00:00Z",
    );
    payload["updated_by"] = serde_json::json!(user.id);
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/admin/bookings/{second}"),
        &token,
        payload,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
