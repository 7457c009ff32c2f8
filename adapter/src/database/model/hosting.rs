use chrono::{DateTime, Utc};
use kernel::model::hosting::{Guest, Hosting, HostingStatus};
use kernel::model::id::{EmployeeId, HostingId, RoomId};
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
pub struct HostingRow {
    pub id: HostingId,
    pub employee_id: EmployeeId,
    pub room_id: Option<RoomId>,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub guests: Json<Vec<Guest>>,
    pub applied_guest_count: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: HostingStatus,
}

impl From<HostingRow> for Hosting {
    fn from(value: HostingRow) -> Self {
        let HostingRow {
            id,
            employee_id,
            room_id,
            guest_first_name,
            guest_last_name,
            guests,
            applied_guest_count,
            start_date,
            end_date,
            notes,
            status,
        } = value;
        Hosting {
            id,
            employee_id,
            room_id,
            guest_first_name,
            guest_last_name,
            guests: guests.0,
            applied_guest_count,
            start_date,
            end_date,
            notes,
            status,
        }
    }
}
