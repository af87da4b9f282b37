//! Handlers for the `/bed-specs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::bed_spec::{BedSpec, CreateBedSpec, UpdateBedSpec};
use dormhub_db::repositories::BedSpecRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/bed-specs
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBedSpec>,
) -> AppResult<(StatusCode, Json<Envelope<BedSpec>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if BedSpecRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Bed specification name already exists".into(),
        )));
    }

    let bed_spec = BedSpecRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Bed specification created successfully",
            bed_spec,
        )),
    ))
}

/// GET /api/admin/bed-specs
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<BedSpec>>>> {
    let bed_specs = BedSpecRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Bed specifications retrieved successfully",
        bed_specs,
    )))
}

/// GET /api/admin/bed-specs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<BedSpec>>> {
    let bed_spec = BedSpecRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BedSpec",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Bed specification fetched successfully",
        bed_spec,
    )))
}

/// PUT /api/admin/bed-specs/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBedSpec>,
) -> AppResult<Json<Envelope<BedSpec>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let bed_spec = BedSpecRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BedSpec",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Bed specification updated successfully",
        bed_spec,
    )))
}

/// DELETE /api/admin/bed-specs/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = BedSpecRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BedSpec",
            id,
        }));
    }
    Ok(Json(Envelope::ok(
        "Bed specification deleted successfully",
        id,
    )))
}
