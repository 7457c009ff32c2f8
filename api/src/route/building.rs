use axum::routing::{delete, get, post, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::building::{
    delete_building, delete_floor, register_building, register_floor, show_building,
    show_building_floors, show_building_list, show_floor, show_floor_list, update_building,
    update_floor,
};

pub fn build_building_routers() -> Router<AppRegistry> {
    let buildings_routers = Router::new()
        .route("/", post(register_building))
        .route("/", get(show_building_list))
        .route("/:building_id", get(show_building))
        .route("/:building_id", put(update_building))
        .route("/:building_id", delete(delete_building))
        .route("/:building_id/floors", post(register_floor))
        .route("/:building_id/floors", get(show_building_floors));

    let floors_routers = Router::new()
        .route("/", get(show_floor_list))
        .route("/:floor_id", get(show_floor))
        .route("/:floor_id", put(update_floor))
        .route("/:floor_id", delete(delete_floor));

    Router::new()
        .nest("/buildings", buildings_routers)
        .nest("/floors", floors_routers)
}
