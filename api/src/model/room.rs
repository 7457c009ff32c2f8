use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::id::{FloorId, RoomId};
use kernel::model::room::event::{CreateRoom, UpdateRoom};
use kernel::model::room::{Room, RoomStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[garde(skip)]
    pub floor_id: FloorId,
    #[garde(length(min = 1))]
    pub room_number: String,
    #[garde(range(min = 1))]
    pub capacity: i32,
}

impl From<CreateRoomRequest> for CreateRoom {
    fn from(value: CreateRoomRequest) -> Self {
        let CreateRoomRequest {
            floor_id,
            room_number,
            capacity,
        } = value;
        CreateRoom {
            floor_id,
            room_number,
            capacity,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomRequest {
    #[garde(skip)]
    pub room_number: Option<String>,
    #[garde(range(min = 1))]
    pub capacity: Option<i32>,
    #[garde(skip)]
    pub under_maintenance: Option<bool>,
}

#[derive(new)]
pub struct UpdateRoomRequestWithId(RoomId, UpdateRoomRequest);

impl From<UpdateRoomRequestWithId> for UpdateRoom {
    fn from(value: UpdateRoomRequestWithId) -> Self {
        let UpdateRoomRequestWithId(
            room_id,
            UpdateRoomRequest {
                room_number,
                capacity,
                under_maintenance,
            },
        ) = value;
        UpdateRoom {
            room_id,
            room_number,
            capacity,
            under_maintenance,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomResponse {
    pub id: RoomId,
    pub floor_id: FloorId,
    pub room_number: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub under_maintenance: bool,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            floor_id,
            room_number,
            capacity,
            current_occupancy,
            under_maintenance,
            status,
            created_at,
        } = value;
        Self {
            id,
            floor_id,
            room_number,
            capacity,
            current_occupancy,
            under_maintenance,
            status,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomsResponse {
    pub items: Vec<RoomResponse>,
}

impl From<Vec<Room>> for RoomsResponse {
    fn from(value: Vec<Room>) -> Self {
        Self {
            items: value.into_iter().map(RoomResponse::from).collect(),
        }
    }
}
