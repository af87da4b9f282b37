//! Handlers for the `/buildings` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::building::{Building, CreateBuilding, UpdateBuilding};
use dormhub_db::repositories::BuildingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/buildings
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBuilding>,
) -> AppResult<(StatusCode, Json<Envelope<Building>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if BuildingRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Building name already exists".into(),
        )));
    }

    let building = BuildingRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created("Building created successfully", building)),
    ))
}

/// GET /api/admin/buildings
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<Building>>>> {
    let buildings = BuildingRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Buildings retrieved successfully",
        buildings,
    )))
}

/// GET /api/admin/buildings/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Building>>> {
    let building = BuildingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    Ok(Json(Envelope::ok("Building fetched successfully", building)))
}

/// PUT /api/admin/buildings/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBuilding>,
) -> AppResult<Json<Envelope<Building>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let building = BuildingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }))?;
    Ok(Json(Envelope::ok("Building updated successfully", building)))
}

/// DELETE /api/admin/buildings/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = BuildingRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Building deleted successfully", id)))
}
