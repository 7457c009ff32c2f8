use chrono::{DateTime, Utc};
use kernel::model::hosting::Guest;
use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::Reservation;
use sqlx::types::Json;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub first_name: String,
    pub last_name: String,
    pub guest_id_card_number: String,
    pub guest_phone: String,
    pub job_title: String,
    pub department: String,
    pub guests: Json<Vec<Guest>>,
    pub check_in_date: DateTime<Utc>,
    pub check_out_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            id,
            room_id,
            first_name,
            last_name,
            guest_id_card_number,
            guest_phone,
            job_title,
            department,
            guests,
            check_in_date,
            check_out_date,
            notes,
            created_at,
        } = value;
        Reservation {
            id,
            room_id,
            first_name,
            last_name,
            guest_id_card_number,
            guest_phone,
            job_title,
            department,
            guests: guests.0,
            check_in_date,
            check_out_date,
            notes,
            created_at,
        }
    }
}
