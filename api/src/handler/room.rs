use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::RoomId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::room::{
    CreateRoomRequest, RoomResponse, RoomsResponse, UpdateRoomRequest, UpdateRoomRequestWithId,
};
use crate::model::ApiResponse;

pub async fn register_room(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .room_repository()
        .create(req.into())
        .await
        .map(RoomResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_room_list(State(registry): State<AppRegistry>) -> AppResult<impl IntoResponse> {
    registry
        .room_repository()
        .find_all()
        .await
        .map(RoomsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|room| match room {
            Some(room) => Ok(ApiResponse::ok(RoomResponse::from(room))),
            None => Err(AppError::EntityNotFound("Room not found".into())),
        })
}

pub async fn update_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = UpdateRoomRequestWithId::new(room_id, req);
    registry
        .room_repository()
        .update(update.into())
        .await
        .map(RoomResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_room(
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .room_repository()
        .delete(room_id)
        .await
        .map(|_| ApiResponse::message("Room deleted"))
}
