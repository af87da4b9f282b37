//! Handlers for the `/common-features` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::common_feature::{CommonFeature, CreateCommonFeature, UpdateCommonFeature};
use dormhub_db::repositories::CommonFeatureRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/common-features
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateCommonFeature>,
) -> AppResult<(StatusCode, Json<Envelope<CommonFeature>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if CommonFeatureRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Common feature name already exists".into(),
        )));
    }

    let feature = CommonFeatureRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Common feature created successfully",
            feature,
        )),
    ))
}

/// GET /api/admin/common-features
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<CommonFeature>>>> {
    let features = CommonFeatureRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok(
        "Common features retrieved successfully",
        features,
    )))
}

/// GET /api/admin/common-features/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<CommonFeature>>> {
    let feature = CommonFeatureRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CommonFeature",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Common feature fetched successfully",
        feature,
    )))
}

/// PUT /api/admin/common-features/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCommonFeature>,
) -> AppResult<Json<Envelope<CommonFeature>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let feature = CommonFeatureRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CommonFeature",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Common feature updated successfully",
        feature,
    )))
}

/// DELETE /api/admin/common-features/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = CommonFeatureRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CommonFeature",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Common feature deleted successfully", id)))
}
