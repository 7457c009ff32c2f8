use chrono::{DateTime, Utc};
use kernel::model::id::{MaintenanceRequestId, RoomId};
use kernel::model::maintenance::{MaintenanceRequest, MaintenanceStatus};

#[derive(sqlx::FromRow)]
pub struct MaintenanceRequestRow {
    pub id: MaintenanceRequestId,
    pub room_id: RoomId,
    pub problem_type: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub reported_at: DateTime<Utc>,
}

impl From<MaintenanceRequestRow> for MaintenanceRequest {
    fn from(value: MaintenanceRequestRow) -> Self {
        let MaintenanceRequestRow {
            id,
            room_id,
            problem_type,
            description,
            status,
            due_date,
            reported_at,
        } = value;
        MaintenanceRequest {
            id,
            room_id,
            problem_type,
            description,
            status,
            due_date,
            reported_at,
        }
    }
}
