pub mod event;

use chrono::{DateTime, Utc};

use crate::model::hosting::Guest;
use crate::model::id::{ReservationId, RoomId};

/// A forward booking of a room, independent of any employee assignment.
#[derive(Debug, Clone)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub first_name: String,
    pub last_name: String,
    pub guest_id_card_number: String,
    pub guest_phone: String,
    pub job_title: String,
    pub department: String,
    pub guests: Vec<Guest>,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
