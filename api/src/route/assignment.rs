use axum::routing::{get, patch, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::assignment::{
    checkout_assignment, reassign_assignment, register_assignment, show_assignment_list,
};

pub fn build_assignment_routers() -> Router<AppRegistry> {
    let assignments_routers = Router::new()
        .route("/", post(register_assignment))
        .route("/", get(show_assignment_list))
        .route("/:assignment_id/reassign", patch(reassign_assignment))
        .route("/:assignment_id/checkout", patch(checkout_assignment));

    Router::new().nest("/assignments", assignments_routers)
}
