use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::hosting::Guest;
use kernel::model::id::{ReservationId, RoomId};
use kernel::model::reservation::event::CreateReservation;
use kernel::model::reservation::Reservation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(length(min = 1))]
    pub guest_id_card_number: String,
    #[garde(length(min = 1))]
    pub guest_phone: String,
    #[garde(length(min = 1))]
    pub job_title: String,
    #[garde(length(min = 1))]
    pub department: String,
    #[garde(skip)]
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[garde(skip)]
    pub check_in_date: DateTime<Utc>,
    #[garde(skip)]
    pub check_out_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub notes: Option<String>,
}

impl From<CreateReservationRequest> for CreateReservation {
    fn from(value: CreateReservationRequest) -> Self {
        let CreateReservationRequest {
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
        } = value;
        CreateReservation {
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
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
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

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
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
        Self {
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
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationsResponse {
    pub items: Vec<ReservationResponse>,
}

impl From<Vec<Reservation>> for ReservationsResponse {
    fn from(value: Vec<Reservation>) -> Self {
        Self {
            items: value.into_iter().map(ReservationResponse::from).collect(),
        }
    }
}
