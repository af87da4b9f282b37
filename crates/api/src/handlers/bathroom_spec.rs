//! Handlers for the `/bathroom-specs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::bathroom_spec::{BathroomSpec, CreateBathroomSpec, UpdateBathroomSpec};
use dormhub_db::repositories::BathroomSpecRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/bathroom-specs
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateBathroomSpec>,
) -> AppResult<(StatusCode, Json<Envelope<BathroomSpec>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if BathroomSpecRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Bathroom specification name already exists".into(),
        )));
    }

    let bathroom_spec = BathroomSpecRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Bathroom specification created successfully",
            bathroom_spec,
        )),
    ))
}

/// GET /api/admin/bathroom-specs
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<BathroomSpec>>>> {
    let bathroom_specs = BathroomSpecRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Bathroom specifications retrieved successfully",
        bathroom_specs,
    )))
}

/// GET /api/admin/bathroom-specs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<BathroomSpec>>> {
    let bathroom_spec = BathroomSpecRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BathroomSpec",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Bathroom specification fetched successfully",
        bathroom_spec,
    )))
}

/// PUT /api/admin/bathroom-specs/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBathroomSpec>,
) -> AppResult<Json<Envelope<BathroomSpec>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let bathroom_spec = BathroomSpecRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "BathroomSpec",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Bathroom specification updated successfully",
        bathroom_spec,
    )))
}

/// DELETE /api/admin/bathroom-specs/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = BathroomSpecRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "BathroomSpec",
            id,
        }));
    }
    Ok(Json(Envelope::ok(
        "Bathroom specification deleted successfully",
        id,
    )))
}
