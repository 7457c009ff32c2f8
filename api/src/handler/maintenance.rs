use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::MaintenanceRequestId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::maintenance::{
    MaintenanceRequestResponse, MaintenanceRequestsResponse, ModifyMaintenanceRequest,
    ModifyMaintenanceRequestWithId, RegisterMaintenanceRequest,
};
use crate::model::ApiResponse;

pub async fn register_maintenance_request(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterMaintenanceRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .maintenance_repository()
        .create(req.into())
        .await
        .map(MaintenanceRequestResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_maintenance_request_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .maintenance_repository()
        .find_all()
        .await
        .map(MaintenanceRequestsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_maintenance_request(
    Path(request_id): Path<MaintenanceRequestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .maintenance_repository()
        .find_by_id(request_id)
        .await
        .and_then(|request| match request {
            Some(request) => Ok(ApiResponse::ok(MaintenanceRequestResponse::from(request))),
            None => Err(AppError::EntityNotFound(
                "Maintenance request not found".into(),
            )),
        })
}

pub async fn update_maintenance_request(
    Path(request_id): Path<MaintenanceRequestId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ModifyMaintenanceRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = ModifyMaintenanceRequestWithId::new(request_id, req);
    registry
        .maintenance_repository()
        .update(update.into())
        .await
        .map(MaintenanceRequestResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_maintenance_request(
    Path(request_id): Path<MaintenanceRequestId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .maintenance_repository()
        .delete(request_id)
        .await
        .map(|_| ApiResponse::message("Maintenance request deleted"))
}
