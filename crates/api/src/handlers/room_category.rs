//! Handlers for the `/room-categories` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::room_category::{CreateRoomCategory, RoomCategory, UpdateRoomCategory};
use dormhub_db::repositories::RoomCategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/room-categories
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRoomCategory>,
) -> AppResult<(StatusCode, Json<Envelope<RoomCategory>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if RoomCategoryRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Room category name already exists".into(),
        )));
    }

    let category = RoomCategoryRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Room category created successfully",
            category,
        )),
    ))
}

/// GET /api/admin/room-categories
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<RoomCategory>>>> {
    let categories = RoomCategoryRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Room categories retrieved successfully",
        categories,
    )))
}

/// GET /api/admin/room-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<RoomCategory>>> {
    let category = RoomCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomCategory",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Room category fetched successfully",
        category,
    )))
}

/// PUT /api/admin/room-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoomCategory>,
) -> AppResult<Json<Envelope<RoomCategory>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let category = RoomCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomCategory",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Room category updated successfully",
        category,
    )))
}

/// DELETE /api/admin/room-categories/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = RoomCategoryRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RoomCategory",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Room category deleted successfully", id)))
}
