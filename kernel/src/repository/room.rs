use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::RoomId;
use crate::model::room::event::{CreateRoom, UpdateRoom};
use crate::model::room::Room;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    async fn create(&self, event: CreateRoom) -> AppResult<Room>;
    async fn find_all(&self) -> AppResult<Vec<Room>>;
    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
    // Capacity and maintenance-flag changes re-derive the stored status.
    async fn update(&self, event: UpdateRoom) -> AppResult<Room>;
    // Refuses to delete a room with assignments (active or past) or
    // occupancy above zero.
    async fn delete(&self, room_id: RoomId) -> AppResult<()>;
}
