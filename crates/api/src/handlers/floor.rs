//! Handlers for the `/floors` resource.
//!
//! Floors reference a building; create and update validate the reference
//! against active buildings.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::floor::{CreateFloor, Floor, UpdateFloor};
use dormhub_db::repositories::{BuildingRepo, FloorRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

async fn ensure_building_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if BuildingRepo::exists_active(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))
    }
}

/// POST /api/admin/floors
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateFloor>,
) -> AppResult<(StatusCode, Json<Envelope<Floor>>)> {
    input.validate()?;
    ensure_building_exists(&state, input.building_id).await?;
    ensure_user_exists(&state, input.created_by).await?;
    if FloorRepo::name_exists(&state.pool, input.building_id, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Floor name already exists in this building".into(),
        )));
    }

    let floor = FloorRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created("Floor created successfully", floor)),
    ))
}

/// GET /api/admin/floors
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<Floor>>>> {
    let floors = FloorRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok("Floors retrieved successfully", floors)))
}

/// GET /api/admin/floors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Floor>>> {
    let floor = FloorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id,
        }))?;
    Ok(Json(Envelope::ok("Floor fetched successfully", floor)))
}

/// PUT /api/admin/floors/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFloor>,
) -> AppResult<Json<Envelope<Floor>>> {
    input.validate()?;
    ensure_building_exists(&state, input.building_id).await?;
    ensure_user_exists(&state, input.updated_by).await?;

    let floor = FloorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id,
        }))?;
    Ok(Json(Envelope::ok("Floor updated successfully", floor)))
}

/// DELETE /api/admin/floors/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = FloorRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Floor deleted successfully", id)))
}
