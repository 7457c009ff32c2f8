use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::employee::{
    delete_employee, register_employee, show_employee, show_employee_list, update_employee,
};

pub fn build_employee_routers() -> Router<AppRegistry> {
    let employees_routers = Router::new()
        .route("/", post(register_employee))
        .route("/", get(show_employee_list))
        .route("/:employee_id", get(show_employee))
        .route("/:employee_id", put(update_employee))
        .route("/:employee_id", delete(delete_employee));

    Router::new().nest("/employees", employees_routers)
}
