//! Handlers for the `/rooms` resource.
//!
//! The listing joins building/floor/category names, supports substring
//! filters, allow-listed dynamic sorting, and pagination with totals in the
//! envelope.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::room::{
    CreateRoom, Room, RoomListFilter, RoomSortField, RoomWithNames, SortOrder, UpdateRoom,
};
use dormhub_db::repositories::{BuildingRepo, FloorRepo, RoomCategoryRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::query::PaginationParams;
use crate::response::{Envelope, PageEnvelope};
use crate::state::AppState;

/// Query parameters for the joined room listing (pagination is extracted
/// separately via [`PaginationParams`]).
#[derive(Debug, Deserialize)]
pub struct RoomListParams {
    pub name: Option<String>,
    pub building_id: Option<DbId>,
    pub building_name: Option<String>,
    pub floor_name: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

async fn ensure_refs_exist(
    state: &AppState,
    building_id: DbId,
    floor_id: DbId,
    category_id: DbId,
) -> AppResult<()> {
    if !BuildingRepo::exists_active(&state.pool, building_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: building_id,
        }));
    }
    if !FloorRepo::exists_active(&state.pool, floor_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id: floor_id,
        }));
    }
    if !RoomCategoryRepo::exists_active(&state.pool, category_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RoomCategory",
            id: category_id,
        }));
    }
    Ok(())
}

/// POST /api/admin/rooms
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Envelope<Room>>)> {
    input.validate()?;
    ensure_refs_exist(&state, input.building_id, input.floor_id, input.category_id).await?;
    ensure_user_exists(&state, input.created_by).await?;
    if RoomRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Room name already exists".into(),
        )));
    }

    let room = RoomRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created("Room created successfully", room)),
    ))
}

/// GET /api/admin/rooms
///
/// Filters: `name`, `building_id`, `building_name`, `floor_name`
/// (substring matches are case-insensitive). Sorting: `sort_by` against a
/// fixed allow-list plus `sort_order` (`asc`/`desc`); an unknown field is a
/// 400, never passed through to SQL.
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<RoomListParams>,
    Query(pagination): Query<PaginationParams>,
) -> AppResult<Json<PageEnvelope<RoomWithNames>>> {
    let sort_by = match &params.sort_by {
        Some(raw) => RoomSortField::parse(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "sort_by must be one of room_name, building_name, floor_name, \
                 category_name, created_time; got '{raw}'"
            )))
        })?,
        None => RoomSortField::default(),
    };
    let sort_order = match &params.sort_order {
        Some(raw) => SortOrder::parse(raw).ok_or_else(|| {
            AppError::Core(CoreError::Validation(format!(
                "sort_order must be 'asc' or 'desc', got '{raw}'"
            )))
        })?,
        None => SortOrder::default(),
    };

    let (page, page_size) = pagination.clamp();

    let filter = RoomListFilter {
        name: params.name,
        building_id: params.building_id,
        building_name: params.building_name,
        floor_name: params.floor_name,
        sort_by,
        sort_order,
        page,
        page_size,
    };

    let (rooms, total_count) = RoomRepo::list_with_names(&state.pool, &filter).await?;
    Ok(Json(PageEnvelope::ok(
        "Rooms fetched successfully",
        total_count,
        page,
        page_size,
        rooms,
    )))
}

/// GET /api/admin/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Room>>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(Envelope::ok("Room fetched successfully", room)))
}

/// PUT /api/admin/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoom>,
) -> AppResult<Json<Envelope<Room>>> {
    input.validate()?;
    ensure_refs_exist(&state, input.building_id, input.floor_id, input.category_id).await?;
    ensure_user_exists(&state, input.updated_by).await?;

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Room", id }))?;
    Ok(Json(Envelope::ok("Room updated successfully", room)))
}

/// DELETE /api/admin/rooms/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = RoomRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Room", id }));
    }
    Ok(Json(Envelope::ok("Room deleted successfully", id)))
}
