use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::activity::{ActivityLogResponse, ActivityLogsResponse, CreateActivityLogRequest};
use crate::model::ApiResponse;

pub async fn register_activity_log(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateActivityLogRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .activity_log_repository()
        .append(req.into())
        .await
        .map(ActivityLogResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_activity_log_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .activity_log_repository()
        .find_all()
        .await
        .map(ActivityLogsResponse::from)
        .map(ApiResponse::ok)
}
