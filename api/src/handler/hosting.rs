use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::HostingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::hosting::{
    CreateHostingRequest, HostingResponse, HostingsResponse, UpdateHostingRequest,
    UpdateHostingRequestWithId,
};
use crate::model::ApiResponse;

pub async fn register_hosting(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateHostingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .hosting_repository()
        .create(req.into())
        .await
        .map(HostingResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_hosting_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .hosting_repository()
        .find_all()
        .await
        .map(HostingsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_hosting(
    Path(hosting_id): Path<HostingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .hosting_repository()
        .find_by_id(hosting_id)
        .await
        .and_then(|hosting| match hosting {
            Some(hosting) => Ok(ApiResponse::ok(HostingResponse::from(hosting))),
            None => Err(AppError::EntityNotFound("Hosting not found".into())),
        })
}

pub async fn update_hosting(
    Path(hosting_id): Path<HostingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateHostingRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = UpdateHostingRequestWithId::new(hosting_id, req);
    registry
        .hosting_repository()
        .update(update.into())
        .await
        .map(HostingResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_hosting(
    Path(hosting_id): Path<HostingId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .hosting_repository()
        .delete(hosting_id)
        .await
        .map(|_| ApiResponse::message("Hosting deleted"))
}
