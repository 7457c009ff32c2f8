use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::{BuildingId, FloorId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::building::{
    BuildingResponse, BuildingsResponse, CreateBuildingRequest, CreateFloorRequest,
    CreateFloorRequestWithId, FloorResponse, FloorsResponse, UpdateBuildingRequest,
    UpdateBuildingRequestWithId, UpdateFloorRequest, UpdateFloorRequestWithId,
};
use crate::model::ApiResponse;

pub async fn register_building(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBuildingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .building_repository()
        .create(req.into())
        .await
        .map(BuildingResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_building_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .building_repository()
        .find_all()
        .await
        .map(BuildingsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_building(
    Path(building_id): Path<BuildingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .building_repository()
        .find_by_id(building_id)
        .await
        .and_then(|building| match building {
            Some(building) => Ok(ApiResponse::ok(BuildingResponse::from(building))),
            None => Err(AppError::EntityNotFound("Building not found".into())),
        })
}

pub async fn update_building(
    Path(building_id): Path<BuildingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateBuildingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = UpdateBuildingRequestWithId::new(building_id, req);
    registry
        .building_repository()
        .update(update.into())
        .await
        .map(BuildingResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_building(
    Path(building_id): Path<BuildingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .building_repository()
        .delete(building_id)
        .await
        .map(|_| ApiResponse::message("Building deleted"))
}

pub async fn register_floor(
    Path(building_id): Path<BuildingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFloorRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let create = CreateFloorRequestWithId::new(building_id, req);
    registry
        .floor_repository()
        .create(create.into())
        .await
        .map(FloorResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_building_floors(
    Path(building_id): Path<BuildingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .floor_repository()
        .find_by_building(building_id)
        .await
        .map(FloorsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_floor_list(State(registry): State<AppRegistry>) -> AppResult<impl IntoResponse> {
    registry
        .floor_repository()
        .find_all()
        .await
        .map(FloorsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_floor(
    Path(floor_id): Path<FloorId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .floor_repository()
        .find_by_id(floor_id)
        .await
        .and_then(|floor| match floor {
            Some(floor) => Ok(ApiResponse::ok(FloorResponse::from(floor))),
            None => Err(AppError::EntityNotFound("Floor not found".into())),
        })
}

pub async fn update_floor(
    Path(floor_id): Path<FloorId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateFloorRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = UpdateFloorRequestWithId::new(floor_id, req);
    registry
        .floor_repository()
        .update(update.into())
        .await
        .map(FloorResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_floor(
    Path(floor_id): Path<FloorId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .floor_repository()
        .delete(floor_id)
        .await
        .map(|_| ApiResponse::message("Floor deleted"))
}
