use axum::routing::{delete, get, patch, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::maintenance::{
    delete_maintenance_request, register_maintenance_request, show_maintenance_request,
    show_maintenance_request_list, update_maintenance_request,
};

pub fn build_maintenance_routers() -> Router<AppRegistry> {
    let maintenance_routers = Router::new()
        .route("/", post(register_maintenance_request))
        .route("/", get(show_maintenance_request_list))
        .route("/:request_id", get(show_maintenance_request))
        .route("/:request_id", patch(update_maintenance_request))
        .route("/:request_id", delete(delete_maintenance_request));

    Router::new().nest("/maintenance-requests", maintenance_routers)
}
