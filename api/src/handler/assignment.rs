use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::AssignmentId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::model::assignment::{
    AssignmentResponse, AssignmentsResponse, CheckoutEmployeeRequest,
    CheckoutEmployeeRequestWithId, CreateAssignmentRequest, ReassignEmployeeRequest,
    ReassignEmployeeRequestWithId, ReassignResponse,
};
use crate::model::ApiResponse;

pub async fn register_assignment(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateAssignmentRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .assignment_repository()
        .assign(req.into())
        .await
        .map(AssignmentResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_assignment_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .assignment_repository()
        .find_all()
        .await
        .map(AssignmentsResponse::from)
        .map(ApiResponse::ok)
}

pub async fn reassign_assignment(
    Path(assignment_id): Path<AssignmentId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<ReassignEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let reassign = ReassignEmployeeRequestWithId::new(assignment_id, req);
    registry
        .assignment_repository()
        .reassign(reassign.into())
        .await
        .map(ReassignResponse::from)
        .map(ApiResponse::ok)
}

pub async fn checkout_assignment(
    Path(assignment_id): Path<AssignmentId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CheckoutEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let checkout = CheckoutEmployeeRequestWithId::new(assignment_id, req);
    registry
        .assignment_repository()
        .checkout(checkout.into())
        .await
        .map(AssignmentResponse::from)
        .map(ApiResponse::ok)
}
