//! Reference catalog tests: the shared CRUD contract, exercised on
//! buildings plus a spot check on each other catalog entity.

mod common;

use axum::http::StatusCode;
use common::{auth_token, body_json, delete_json, get, post_json, put_json, seed_user};
use sqlx::PgPool;

async fn create_building(pool: &PgPool, token: &str, actor: i64, name: &str) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/buildings",
        token,
        serde_json::json!({"name": name, "remarks": "test", "created_by": actor}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_building_round_trips(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/buildings",
        &token,
        serde_json::json!({"name": "Block A", "remarks": "main block", "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert_eq!(created["status"], 201);
    assert_eq!(created["data"]["name"], "Block A");
    assert_eq!(created["data"]["remarks"], "main block");
    assert_eq!(created["data"]["is_active"], true);
    assert_eq!(created["data"]["is_approve"], false);
    assert_eq!(created["data"]["created_by"], user.id);
    let id = created["data"]["id"].as_i64().unwrap();

    // Fetch by id: all submitted fields unchanged plus audit fields.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/admin/buildings/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = body_json(response).await;
    assert_eq!(fetched["data"]["name"], "Block A");
    assert!(fetched["data"]["created_time"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_building_empty_name_returns_400(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/buildings",
        &token,
        serde_json::json!({"name": "", "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_building_unknown_actor_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/buildings",
        &token,
        serde_json::json!({"name": "Block B", "created_by": 999_999}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_building_name_returns_409(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/buildings",
        &token,
        serde_json::json!({"name": "Block A", "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_excludes_soft_deleted_rows(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let keep = create_building(&pool, &token, user.id, "Keep").await;
    let drop = create_building(&pool, &token, user.id, "Drop").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_json(
        app,
        &format!("/api/admin/buildings/{drop}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/admin/buildings", &token).await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_i64().unwrap())
        .collect();
    assert!(ids.contains(&keep));
    assert!(!ids.contains(&drop));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_double_delete_returns_404_and_preserves_row(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let id = create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool.clone());
    let response = delete_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Second delete: already inactive.
    let app = common::build_test_app(pool.clone());
    let response = delete_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The row itself survives with inactive status and its data intact.
    let row = dormhub_db::repositories::BuildingRepo::find_any_by_id(&pool, id)
        .await
        .unwrap()
        .expect("soft-deleted row must still exist");
    assert!(!row.is_active);
    assert_eq!(row.name, "Block A");
    assert_eq!(row.inactive_by, Some(user.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_frees_name_for_reuse(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let id = create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool.clone());
    delete_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;

    // Uniqueness is probed among active rows only.
    create_building(&pool, &token, user.id, "Block A").await;
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_inactive_building_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let id = create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool.clone());
    delete_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"inactive_by": user.id}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"name": "Renamed", "updated_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_building_stamps_updated_fields(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let id = create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/admin/buildings/{id}"),
        &token,
        serde_json::json!({"name": "Block A2", "remarks": "renovated", "updated_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Block A2");
    assert_eq!(json["data"]["updated_by"], user.id);
    assert!(json["data"]["updated_time"].is_string());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_floor_with_unknown_building_returns_404(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/floors",
        &token,
        serde_json::json!({"name": "1st Floor", "building_id": 12345, "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_floor_create_and_fetch(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);
    let building_id = create_building(&pool, &token, user.id, "Block A").await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/floors",
        &token,
        serde_json::json!({"name": "1st Floor", "building_id": building_id, "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/admin/floors/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["building_id"], building_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_category_crud(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/room-categories",
        &token,
        serde_json::json!({
            "name": "Deluxe",
            "base_price": "1500",
            "person_capacity": 2,
            "remarks": "with balcony",
            "created_by": user.id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["base_price"], "1500");
    assert_eq!(json["data"]["person_capacity"], 2);

    // Duplicate name conflicts.
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/admin/room-categories",
        &token,
        serde_json::json!({"name": "Deluxe", "created_by": user.id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_paid_item_crud(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/admin/paid-items",
        &token,
        serde_json::json!({
            "name": "Laundry",
            "price": "120.50",
            "price_calculation_mode": 1,
            "created_by": user.id
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/admin/paid-items/{id}"), &token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["price"], "120.50");
    assert_eq!(json["data"]["price_calculation_mode"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_spec_catalogs_share_the_crud_contract(pool: PgPool) {
    let user = seed_user(&pool).await;
    let token = auth_token(user.id);

    for resource in [
        "common-features",
        "furnitures",
        "bed-specs",
        "bathroom-specs",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/admin/{resource}"),
            &token,
            serde_json::json!({"name": "Sample", "created_by": user.id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED, "{resource}");
        let id = body_json(response).await["data"]["id"].as_i64().unwrap();

        // Duplicate name conflicts.
        let app = common::build_test_app(pool.clone());
        let response = post_json(
            app,
            &format!("/api/admin/{resource}"),
            &token,
            serde_json::json!({"name": "Sample", "created_by": user.id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CONFLICT, "{resource}");

        // Soft delete, then a second delete 404s.
        let app = common::build_test_app(pool.clone());
        let response = delete_json(
            app,
            &format!("/api/admin/{resource}/{id}"),
            &token,
            serde_json::json!({"inactive_by": user.id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "{resource}");

        let app = common::build_test_app(pool.clone());
        let response = delete_json(
            app,
            &format!("/api/admin/{resource}/{id}"),
            &token,
            serde_json::json!({"inactive_by": user.id}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{resource}");
    }
}
