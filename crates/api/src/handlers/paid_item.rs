//! Handlers for the `/paid-items` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::paid_item::{CreatePaidItem, PaidItem, UpdatePaidItem};
use dormhub_db::repositories::PaidItemRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/paid-items
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePaidItem>,
) -> AppResult<(StatusCode, Json<Envelope<PaidItem>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if PaidItemRepo::name_exists(&state.pool, &input.name).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Paid item name already exists".into(),
        )));
    }

    let item = PaidItemRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created("Paid item created successfully", item)),
    ))
}

/// GET /api/admin/paid-items
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<PaidItem>>>> {
    let items = PaidItemRepo::list(&state.pool).await?;
    Ok(Json(Envelope::ok("Paid items retrieved successfully", items)))
}

/// GET /api/admin/paid-items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<PaidItem>>> {
    let item = PaidItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PaidItem",
            id,
        }))?;
    Ok(Json(Envelope::ok("Paid item fetched successfully", item)))
}

/// PUT /api/admin/paid-items/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePaidItem>,
) -> AppResult<Json<Envelope<PaidItem>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;

    let item = PaidItemRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "PaidItem",
            id,
        }))?;
    Ok(Json(Envelope::ok("Paid item updated successfully", item)))
}

/// DELETE /api/admin/paid-items/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = PaidItemRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "PaidItem",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Paid item deleted successfully", id)))
}
