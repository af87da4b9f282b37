//! Room catalog tests: FK validation, the joined listing with filters,
//! allow-listed sorting, and pagination totals.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, delete_json, get, post_json, put_json, seed_user};
use sqlx::PgPool;

/// Seed a building, floor, and category; returns their ids.
async fn seed_room_refs(pool: &PgPool, token: &str, actor: i64) -> (i64, i64, i64) {
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

    (building_id, floor_id, category_id)
}

async fn create_room(
    pool: &PgPool,
    token: &str,
    actor: i64,
    name: &str,
    refs: (i64, i64, i64),
) -> i64 {
    let (building_id, floor_id, category_id) = refs;
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/rooms",
        token,
        serde_json::json!({
            "name": name,
            "description": "south facing",
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

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_round_trips(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_room_refs(&pool, &token, user.id).await;

    let id = create_room(&pool, &token, user.id, "A-101", refs).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/admin/rooms/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "A-101");
    assert_eq!(json["data"]["has_details"], false);
    assert_eq!(json["data"]["is_available"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_with_unknown_category_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let (building_id, floor_id, _) = seed_room_refs(&pool, &token, user.id).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/rooms",
        &token,
        serde_json::json!({
            "name": "A-101",
            "category_id": 99_999,
            "floor_id": floor_id,
            "building_id": building_id,
            "created_by": user.id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_room_with_inactive_building_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let (building_id, floor_id, category_id) = seed_room_refs(&pool, &token, user.id).await;

    let app = common::build_test_app(pool.clone());
    delete_json(
        app,
        &format!("/api/admin/buildings/{building_id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/rooms",
        &token,
        serde_json::json!({
            "name": "A-101",
            "category_id": category_id,
            "floor_id": floor_id,
            "building_id": building_id,
            "created_by": user.id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_denormalizes_names_and_filters(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_room_refs(&pool, &token, user.id).await;
    create_room(&pool, &token, user.id, "A-101", refs).await;
    create_room(&pool, &token, user.id, "A-102", refs).await;
    create_room(&pool, &token, user.id, "B-201", refs).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/admin/rooms", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 3);
    let first = &json["data"][0];
    assert_eq!(first["building_name"], "Block A");
    assert_eq!(first["floor_name"], "1st Floor");
    assert_eq!(first["category_name"], "Standard");

    // Case-insensitive substring filter on the room name.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/rooms?name=a-10", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination_totals_and_past_the_end_page(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_room_refs(&pool, &token, user.id).await;
    for n in 1..=3 {
        create_room(&pool, &token, user.id, &format!("A-10{n}"), refs).await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/admin/rooms?page=1&page_size=2", &token).await;
    let json = body_json(response).await;
    assert_eq!(json["total_count"], 3);
    assert_eq!(json["total_pages"], 2); // ceil(3 / 2)
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    // A page past the end is an empty 200, not an error.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/rooms?page=5&page_size=2", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], 200);
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sort_by_allow_list(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_room_refs(&pool, &token, user.id).await;
    create_room(&pool, &token, user.id, "Zulu", refs).await;
    create_room(&pool, &token, user.id, "Alpha", refs).await;

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        "/api/admin/rooms?sort_by=room_name&sort_order=asc",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Alpha");

    let app = common::build_test_app(pool.clone());
    let response = get(
        app,
        "/api/admin/rooms?sort_by=room_name&sort_order=desc",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["name"], "Zulu");

    // A field outside the allow-list is rejected, not interpolated.
    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/rooms?sort_by=drop_table", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_soft_delete_room(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let refs = seed_room_refs(&pool, &token, user.id).await;
    let (building_id, floor_id, category_id) = refs;
    let id = create_room(&pool, &token, user.id, "A-101", refs).await;

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/admin/rooms/{id}"),
        &token,
        serde_json::json!({
            "name": "A-101-renamed",
            "category_id": category_id,
            "floor_id": floor_id,
            "building_id": building_id,
            "updated_by": user.id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "A-101-renamed");

    let app = common::build_test_app(pool.clone());
    let response = delete_json(
        app,
        &format!("/api/admin/rooms/{id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/admin/rooms/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
