use axum::routing::{get, post};
use axum::Router;
use registry::AppRegistry;

use crate::handler::activity::{register_activity_log, show_activity_log_list};

pub fn build_activity_log_routers() -> Router<AppRegistry> {
    let activity_routers = Router::new()
        .route("/", post(register_activity_log))
        .route("/", get(show_activity_log_list));

    Router::new().nest("/activity-logs", activity_routers)
}
