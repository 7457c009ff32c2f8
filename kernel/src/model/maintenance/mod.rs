pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::id::{MaintenanceRequestId, RoomId};

#[derive(Debug, Clone)]
pub struct MaintenanceRequest {
    pub id: MaintenanceRequestId,
    pub room_id: RoomId,
    pub problem_type: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub reported_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "maintenance_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Pending,
    InProgress,
    Resolved,
}
