use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use garde::Validate;
use kernel::model::id::EmployeeId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::employee::{
    CreateEmployeeRequest, EmployeeResponse, EmployeesResponse, UpdateEmployeeRequest,
    UpdateEmployeeRequestWithId,
};
use crate::model::ApiResponse;

pub async fn register_employee(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    registry
        .employee_repository()
        .create(req.into())
        .await
        .map(EmployeeResponse::from)
        .map(ApiResponse::created)
}

pub async fn show_employee_list(
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .employee_repository()
        .find_all()
        .await
        .map(EmployeesResponse::from)
        .map(ApiResponse::ok)
}

pub async fn show_employee(
    Path(employee_id): Path<EmployeeId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .employee_repository()
        .find_by_id(employee_id)
        .await
        .and_then(|employee| match employee {
            Some(employee) => Ok(ApiResponse::ok(EmployeeResponse::from(employee))),
            None => Err(AppError::EntityNotFound("Employee not found".into())),
        })
}

pub async fn update_employee(
    Path(employee_id): Path<EmployeeId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> AppResult<impl IntoResponse> {
    req.validate(&())?;

    let update = UpdateEmployeeRequestWithId::new(employee_id, req);
    registry
        .employee_repository()
        .update(update.into())
        .await
        .map(EmployeeResponse::from)
        .map(ApiResponse::ok)
}

pub async fn delete_employee(
    Path(employee_id): Path<EmployeeId>,
    State(registry): State<AppRegistry>,
) -> AppResult<impl IntoResponse> {
    registry
        .employee_repository()
        .delete(employee_id)
        .await
        .map(|_| ApiResponse::message("Employee deleted"))
}
