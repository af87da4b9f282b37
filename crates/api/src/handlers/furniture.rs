//! Handlers for the `/furnitures` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::furniture::{CreateFurniture, Furniture, UpdateFurniture};
use dormhub_db::repositories::FurnitureRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/furnitures
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateFurniture>,
) -> AppResult<(StatusCode, Json<Envelope<Furniture>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if FurnitureRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Furniture name already exists".into(),
        )));
    }

    let furniture = FurnitureRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Furniture created successfully",
            furniture,
        )),
    ))
}

/// GET /api/admin/furnitures
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<Furniture>>>> {
    let furnitures = FurnitureRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Furnitures retrieved successfully",
        furnitures,
    )))
}

/// GET /api/admin/furnitures/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Furniture>>> {
    let furniture = FurnitureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Furniture",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Furniture fetched successfully",
        furniture,
    )))
}

/// PUT /api/admin/furnitures/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFurniture>,
) -> AppResult<Json<Envelope<Furniture>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let furniture = FurnitureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Furniture",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Furniture updated successfully",
        furniture,
    )))
}

/// DELETE /api/admin/furnitures/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = FurnitureRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Furniture",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Furniture deleted successfully", id)))
}
