use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::settings::{SystemSettingsResponse, UpdateSystemSettingsRequest};
use crate::model::ApiResponse;

pub async fn show_settings(State(registry): State<AppRegistry>) -> AppResult<impl IntoResponse> {
    registry
        .system_settings_repository()
        .get()
        .await
        .map(SystemSettingsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn update_settings(
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateSystemSettingsRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .system_settings_repository()
        .update(req.into())
        .await
        .map(SystemSettingsResponse::from)
        .map(ApiResponse::ok)
}
