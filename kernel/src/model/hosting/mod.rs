pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::id::{EmployeeId, HostingId, RoomId};

/// A guest visit hosted in an employee's current room.
///
/// `room_id` is the host room captured when the hosting was created (the
/// employee's active assignment at that moment); `applied_guest_count` is
/// the occupancy delta that was added to it and must be given back exactly
/// once when the hosting completes.
#[derive(Debug, Clone)]
pub struct Hosting {
    pub id: HostingId,
    pub employee_id: EmployeeId,
    pub room_id: Option<RoomId>,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub guests: Vec<Guest>,
    pub applied_guest_count: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: HostingStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub first_name: String,
    pub last_name: String,
    pub id_card_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "hosting_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostingStatus {
    Active,
    Completed,
    Cancelled,
}
