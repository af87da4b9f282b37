//! Handlers for the `/room-details` resource.
//!
//! Room details enrich a room one-to-one: descriptive attributes, referenced
//! specification lists, and photos. Photos arrive inline as data-URIs and
//! are written to the image directory; reads denormalize every referenced id
//! into `{id, name}` pairs, labelling unresolved ids `"Unknown"` instead of
//! failing.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;

use dormhub_core::error::CoreError;
use dormhub_core::images::{is_inline_image, public_path};
use dormhub_core::rooms::{BalconyStatus, BathroomStatus, RoomSide};
use dormhub_core::types::{DbId, Timestamp};
use dormhub_db::models::audit::DeleteActor;
use dormhub_db::models::room_details::{
    CreateRoomDetails, NewRoomDetails, RoomDetails, RoomDetailsChanges, UpdateRoomDetails,
};
use dormhub_db::repositories::{
    BathroomSpecRepo, BuildingRepo, CommonFeatureRepo, FloorRepo, FurnitureRepo, RoomDetailsRepo,
    RoomRepo,
};

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_user_exists;
use crate::middleware::auth::AuthUser;
use crate::response::Envelope;
use crate::state::AppState;

/// Label used for referenced ids that no longer resolve to an active row.
const UNKNOWN: &str = "Unknown";

/// A referenced catalog entry resolved for display.
#[derive(Debug, Serialize)]
pub struct NamedRef {
    pub id: DbId,
    pub name: String,
}

/// Denormalized room-details record returned by read endpoints.
#[derive(Debug, Serialize)]
pub struct RoomDetailsView {
    pub id: DbId,
    pub room_id: DbId,
    pub room_name: String,
    pub floor_id: DbId,
    pub floor_name: String,
    pub building_id: DbId,
    pub building_name: String,
    pub dimension: String,
    pub side_id: i32,
    pub balcony_id: i32,
    pub attached_bathroom_id: i32,
    pub bed_spec_id: Option<DbId>,
    pub common_features: Vec<NamedRef>,
    pub furnitures: Vec<NamedRef>,
    pub bathroom_specs: Vec<NamedRef>,
    pub image_paths: Vec<String>,
    pub is_approve: bool,
    pub is_active: bool,
    pub created_by: DbId,
    pub created_time: Timestamp,
    pub updated_by: Option<DbId>,
    pub updated_time: Option<Timestamp>,
}

/// Query parameters for `GET /room-details/by-room`.
#[derive(Debug, Deserialize)]
pub struct ByRoomParams {
    pub user_id: DbId,
    pub building_id: DbId,
    pub floor_id: DbId,
    pub room_id: DbId,
}

fn validate_discriminants(side_id: i32, balcony_id: i32, bathroom_id: i32) -> AppResult<()> {
    RoomSide::from_id(side_id)?;
    BalconyStatus::from_id(balcony_id)?;
    BathroomStatus::from_id(bathroom_id)?;
    Ok(())
}

/// Resolve building/floor/room display names, failing 404 on any miss.
async fn resolve_triple_names(
    state: &AppState,
    building_id: DbId,
    floor_id: DbId,
    room_id: DbId,
) -> AppResult<()> {
    if BuildingRepo::name_by_id(&state.pool, building_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Building",
            id: building_id,
        }));
    }
    if FloorRepo::name_by_id(&state.pool, floor_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Floor",
            id: floor_id,
        }));
    }
    if RoomRepo::name_by_id(&state.pool, room_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: room_id,
        }));
    }
    Ok(())
}

/// Write new inline payloads to disk and pass stored references through
/// untouched, preserving list order.
async fn process_images(
    state: &AppState,
    images: &[String],
    actor: DbId,
) -> AppResult<Vec<String>> {
    let mut stored = Vec::with_capacity(images.len());
    for entry in images {
        if is_inline_image(entry) {
            stored.push(state.images.save(entry, actor).await?);
        } else {
            stored.push(entry.clone());
        }
    }
    Ok(stored)
}

/// Denormalize a batch of records: one lookup per referenced catalog, then
/// in-memory maps keyed by id (no per-row queries).
async fn build_views(state: &AppState, rows: Vec<RoomDetails>) -> AppResult<Vec<RoomDetailsView>> {
    let room_ids: Vec<DbId> = rows.iter().map(|r| r.room_id).collect();
    let floor_ids: Vec<DbId> = rows.iter().map(|r| r.floor_id).collect();
    let building_ids: Vec<DbId> = rows.iter().map(|r| r.building_id).collect();
    let feature_ids: Vec<DbId> = rows
        .iter()
        .flat_map(|r| r.common_feature_ids.iter().copied())
        .collect();
    let furniture_ids: Vec<DbId> = rows
        .iter()
        .flat_map(|r| r.furniture_ids.iter().copied())
        .collect();
    let bathroom_ids: Vec<DbId> = rows
        .iter()
        .flat_map(|r| r.bathroom_spec_ids.iter().copied())
        .collect();

    let rooms: HashMap<DbId, String> = RoomRepo::names_by_ids(&state.pool, &room_ids)
        .await?
        .into_iter()
        .collect();
    let floors: HashMap<DbId, String> = FloorRepo::names_by_ids(&state.pool, &floor_ids)
        .await?
        .into_iter()
        .collect();
    let buildings: HashMap<DbId, String> = BuildingRepo::names_by_ids(&state.pool, &building_ids)
        .await?
        .into_iter()
        .collect();
    let features: HashMap<DbId, String> = CommonFeatureRepo::names_by_ids(&state.pool, &feature_ids)
        .await?
        .into_iter()
        .collect();
    let furnitures: HashMap<DbId, String> = FurnitureRepo::names_by_ids(&state.pool, &furniture_ids)
        .await?
        .into_iter()
        .collect();
    let bathrooms: HashMap<DbId, String> =
        BathroomSpecRepo::names_by_ids(&state.pool, &bathroom_ids)
            .await?
            .into_iter()
            .collect();

    let resolve = |map: &HashMap<DbId, String>, id: DbId| NamedRef {
        id,
        name: map.get(&id).cloned().unwrap_or_else(|| UNKNOWN.into()),
    };

    let views = rows
        .into_iter()
        .map(|r| RoomDetailsView {
            id: r.id,
            room_id: r.room_id,
            room_name: rooms
                .get(&r.room_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN.into()),
            floor_id: r.floor_id,
            floor_name: floors
                .get(&r.floor_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN.into()),
            building_id: r.building_id,
            building_name: buildings
                .get(&r.building_id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN.into()),
            dimension: r.dimension,
            side_id: r.side_id,
            balcony_id: r.balcony_id,
            attached_bathroom_id: r.attached_bathroom_id,
            bed_spec_id: r.bed_spec_id,
            common_features: r
                .common_feature_ids
                .iter()
                .map(|&id| resolve(&features, id))
                .collect(),
            furnitures: r
                .furniture_ids
                .iter()
                .map(|&id| resolve(&furnitures, id))
                .collect(),
            bathroom_specs: r
                .bathroom_spec_ids
                .iter()
                .map(|&id| resolve(&bathrooms, id))
                .collect(),
            image_paths: r.image_paths.iter().map(|p| public_path(p)).collect(),
            is_approve: r.is_approve,
            is_active: r.is_active,
            created_by: r.created_by,
            created_time: r.created_time,
            updated_by: r.updated_by,
            updated_time: r.updated_time,
        })
        .collect();

    Ok(views)
}

/// POST /api/admin/room-details
pub async fn create(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(input): Json<CreateRoomDetails>,
) -> AppResult<(StatusCode, Json<Envelope<RoomDetails>>)> {
    input.validate()?;
    validate_discriminants(input.side_id, input.balcony_id, input.attached_bathroom_id)?;
    ensure_user_exists(&state, input.created_by).await?;
    resolve_triple_names(&state, input.building_id, input.floor_id, input.room_id).await?;

    if RoomDetailsRepo::exists_for_triple(
        &state.pool,
        input.room_id,
        input.floor_id,
        input.building_id,
    )
    .await?
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Room details already exist for this room".into(),
        )));
    }

    let image_paths = process_images(&state, &input.images, input.created_by).await?;

    let record = NewRoomDetails {
        room_id: input.room_id,
        floor_id: input.floor_id,
        building_id: input.building_id,
        dimension: input.dimension,
        side_id: input.side_id,
        balcony_id: input.balcony_id,
        attached_bathroom_id: input.attached_bathroom_id,
        bed_spec_id: input.bed_spec_id,
        common_feature_ids: input.common_feature_ids,
        furniture_ids: input.furniture_ids,
        bathroom_spec_ids: input.bathroom_spec_ids,
        image_paths,
        created_by: input.created_by,
    };

    let details = RoomDetailsRepo::create(&state.pool, &record)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: record.room_id,
        }))?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::created(
            "Room details created successfully",
            details,
        )),
    ))
}

/// GET /api/admin/room-details
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
) -> AppResult<Json<Envelope<Vec<RoomDetailsView>>>> {
    let rows = RoomDetailsRepo::list_active(&state.pool).await?;
    if rows.is_empty() {
        return Err(AppError::NotFound("No room details found".into()));
    }

    let views = build_views(&state, rows).await?;
    Ok(Json(Envelope::ok(
        "Room details retrieved successfully",
        views,
    )))
}

/// GET /api/admin/room-details/by-room?user_id=&building_id=&floor_id=&room_id=
pub async fn get_by_criteria(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ByRoomParams>,
) -> AppResult<Json<Envelope<Vec<RoomDetailsView>>>> {
    ensure_user_exists(&state, params.user_id).await?;

    let rows = RoomDetailsRepo::find_by_criteria(
        &state.pool,
        params.building_id,
        params.floor_id,
        params.room_id,
    )
    .await?;
    if rows.is_empty() {
        return Err(AppError::NotFound(
            "No room details found for the specified criteria".into(),
        ));
    }

    let views = build_views(&state, rows).await?;
    Ok(Json(Envelope::ok(
        "Room details retrieved successfully",
        views,
    )))
}

/// PUT /api/admin/room-details/{id}
///
/// `images` entries are either new inline payloads (written to disk) or
/// existing stored references (kept verbatim).
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoomDetails>,
) -> AppResult<Json<Envelope<RoomDetails>>> {
    input.validate()?;
    validate_discriminants(input.side_id, input.balcony_id, input.attached_bathroom_id)?;
    ensure_user_exists(&state, input.updated_by).await?;

    let existing = RoomDetailsRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomDetails",
            id,
        }))?;
    resolve_triple_names(
        &state,
        existing.building_id,
        existing.floor_id,
        existing.room_id,
    )
    .await?;

    let image_paths = process_images(&state, &input.images, input.updated_by).await?;

    let changes = RoomDetailsChanges {
        dimension: input.dimension,
        side_id: input.side_id,
        balcony_id: input.balcony_id,
        attached_bathroom_id: input.attached_bathroom_id,
        bed_spec_id: input.bed_spec_id,
        common_feature_ids: input.common_feature_ids,
        furniture_ids: input.furniture_ids,
        bathroom_spec_ids: input.bathroom_spec_ids,
        image_paths,
        updated_by: input.updated_by,
    };

    let details = RoomDetailsRepo::update(&state.pool, id, &changes)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "RoomDetails",
            id,
        }))?;
    Ok(Json(Envelope::ok(
        "Room details updated successfully",
        details,
    )))
}

/// DELETE /api/admin/room-details/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<DeleteActor>,
) -> AppResult<Json<Envelope<DbId>>> {
    ensure_user_exists(&state, input.inactive_by).await?;

    let deleted = RoomDetailsRepo::soft_delete(&state.pool, id, input.inactive_by).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "RoomDetails",
            id,
        }));
    }
    Ok(Json(Envelope::ok("Room details deleted successfully", id)))
}
