use derive_new::new;

use crate::model::id::{FloorId, RoomId};

#[derive(Debug, new)]
pub struct CreateRoom {
    pub floor_id: FloorId,
    pub room_number: String,
    pub capacity: i32,
}

#[derive(Debug, new)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub room_number: Option<String>,
    pub capacity: Option<i32>,
    pub under_maintenance: Option<bool>,
}
