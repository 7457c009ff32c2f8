use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::ReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::reservation::{
    CreateReservationRequest, ReservationResponse, ReservationsResponse,
};
use crate::model::ApiResponse;

pub async fn register_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(ReservationResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .reservation_repository()
        .find_all()
        .await
        .map(ReservationsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(ApiResponse::ok(ReservationResponse::from(reservation))),
            None => Err(AppError::EntityNotFound("Reservation not found".into())),
        })
}

pub async fn delete_reservation(
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .reservation_repository()
        .delete(reservation_id)
        .await
        .map(|_| ApiResponse::message("Reservation deleted"))
}
