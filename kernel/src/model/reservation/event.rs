use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::hosting::Guest;
use crate::model::id::RoomId;

#[derive(Debug, new)]
pub struct CreateReservation {
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
}
