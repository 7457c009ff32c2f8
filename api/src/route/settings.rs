use axum::routing::{get, put};
use axum::Router;
use registry::AppRegistry;

use crate::handler::settings::{show_settings, update_settings};

pub fn build_settings_routers() -> Router<AppRegistry> {
    let settings_routers = Router::new()
        .route("/", get(show_settings))
        .route("/", put(update_settings));

    Router::new().nest("/settings", settings_routers)
}
