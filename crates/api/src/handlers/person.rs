//! Handlers for the `/persons` resource.
//!
//! Persons are unique on personal phone and email among active rows; the
//! probe runs on create and again on update (excluding the person itself).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::types::DbId;
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::person::{CreatePerson, Person, UpdatePerson};
use dormhub_db::repositories::PersonRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::query::SearchParams;
use crate::response::Envelope;
use crate::state::AppState;

/// POST /api/admin/persons
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreatePerson>,
) -> AppResult<(StatusCode, Json<Envelope<Person>>)> {
    input.validate()?;
    ensure_user_exists(&state, input.created_by).await?;
    if PersonRepo::contact_exists(&state.pool, &input.personal_phone, &input.email, None).await? {
        return Err(AppError::Core(CoreError::Conflict(
            "Personal phone or email already exists".into(),
        )));
    }

    let person = PersonRepo::create(&state.pool, &input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created("Person created successfully", person)),
    ))
}

/// GET /api/admin/persons?search=
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Envelope<Vec<Person>>>> {
    let persons = PersonRepo::list(&state.pool, params.search.as_deref()).await?;
    Ok(Json(Envelope::ok("Persons retrieved successfully", persons)))
}

/// GET /api/admin/persons/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<Person>>> {
    let person = PersonRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(Envelope::ok("Person fetched successfully", person)))
}

/// PUT /api/admin/persons/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePerson>,
) -> AppResult<Json<Envelope<Person>>> {
    input.validate()?;
    ensure_user_exists(&state, input.updated_by).await?;
    if PersonRepo::contact_exists(&state.pool, &input.personal_phone, &input.email, Some(id))
        .await?
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Personal phone or email already exists".into(),
        )));
    }

    let person = PersonRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }))?;
    Ok(Json(Envelope::ok("Person updated successfully", person)))
}

/// DELETE /api/admin/persons/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = PersonRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Person",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Person deleted successfully", id)))
}
