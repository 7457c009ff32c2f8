use chrono::{DateTime, Utc};
use derive_new::new;

use super::MaintenanceStatus;
use crate::model::id::{MaintenanceRequestId, RoomId};

#[derive(Debug, new)]
pub struct CreateMaintenanceRequest {
    pub room_id: RoomId,
    pub problem_type: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, new)]
pub struct UpdateMaintenanceRequest {
    pub request_id: MaintenanceRequestId,
    pub problem_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub due_date: Option<DateTime<Utc>>,
}
