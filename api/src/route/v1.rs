use axum::Router;
use registry::AppRegistry;

use super::activity::build_activity_log_routers;
use super::assignment::build_assignment_routers;
use super::building::build_building_routers;
use super::employee::build_employee_routers;
use super::health::build_health_check_routers;
use super::hosting::build_hosting_routers;
use super::maintenance::build_maintenance_routers;
use super::reservation::build_reservation_routers;
use super::room::build_room_routers;
use super::settings::build_settings_routers;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_building_routers())
        .merge(build_room_routers())
        .merge(build_employee_routers())
        .merge(build_assignment_routers())
        .merge(build_hosting_routers())
        .merge(build_reservation_routers())
        .merge(build_maintenance_routers())
        .merge(build_activity_log_routers())
        .merge(build_settings_routers());

    Router::new().nest("/api/v1", router)
}
