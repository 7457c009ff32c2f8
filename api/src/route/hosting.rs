use axum::routing::{delete, get, patch, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::hosting::{
    delete_hosting, register_hosting, show_hosting, show_hosting_list, update_hosting,
};

pub fn build_hosting_routers() -> Router<AppRegistry> {
    let hostings_routers = Router::new()
        .route("/", post(register_hosting))
        .route("/", get(show_hosting_list))
        .route("/:hosting_id", get(show_hosting))
        .route("/:hosting_id", patch(update_hosting))
        .route("/:hosting_id", delete(delete_hosting));

    Router::new().nest("/hostings", hostings_routers)
}
