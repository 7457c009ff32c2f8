pub mod activity;
pub mod assignment;
pub mod building;
pub mod employee;
pub mod hosting;
pub mod maintenance;
pub mod reservation;
pub mod room;
pub mod settings;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Success envelope: `{code, data}` plus an optional human message.
/// Errors use the `{code, message}` shape produced by `AppError`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub code: u16,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                code: StatusCode::OK.as_u16(),
                data,
                message: None,
            }),
        )
    }

    pub fn created(data: T) -> (StatusCode, Json<Self>) {
        (
            StatusCode::CREATED,
            Json(Self {
                code: StatusCode::CREATED.as_u16(),
                data,
                message: None,
            }),
        )
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> (StatusCode, Json<Self>) {
        (
            StatusCode::OK,
            Json(Self {
                code: StatusCode::OK.as_u16(),
                data: (),
                message: Some(message.into()),
            }),
        )
    }
}
