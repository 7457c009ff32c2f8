use chrono::{DateTime, Utc};
use kernel::model::id::{FloorId, RoomId};
use kernel::model::room::{Room, RoomStatus};

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: RoomId,
    pub floor_id: FloorId,
    pub room_number: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub under_maintenance: bool,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            id,
            floor_id,
            room_number,
            capacity,
            current_occupancy,
            under_maintenance,
            status,
            created_at,
        } = value;
        Room {
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
