use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::RoomId;
use kernel::model::room::event::{CreateRoom, UpdateRoom};
use kernel::model::room::{Room, RoomStatus};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryRoomRepository {
    store: InMemoryStore,
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let mut state = self.store.lock().await;
        if !state.floors.contains_key(&event.floor_id) {
            return Err(AppError::EntityNotFound("Floor not found".into()));
        }
        let room = Room {
            id: RoomId::new(),
            floor_id: event.floor_id,
            room_number: event.room_number,
            capacity: event.capacity,
            current_occupancy: 0,
            under_maintenance: false,
            status: RoomStatus::Available,
            created_at: Utc::now(),
        };
        state.rooms.insert(room.id, room.clone());
        Ok(room)
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        let state = self.store.lock().await;
        let mut rooms: Vec<Room> = state.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| a.room_number.cmp(&b.room_number));
        Ok(rooms)
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let state = self.store.lock().await;
        Ok(state.rooms.get(&room_id).cloned())
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let mut state = self.store.lock().await;
        let room = state
            .rooms
            .get_mut(&event.room_id)
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;
        if let Some(room_number) = event.room_number {
            room.room_number = room_number;
        }
        if let Some(capacity) = event.capacity {
            room.capacity = capacity;
        }
        if let Some(under_maintenance) = event.under_maintenance {
            room.under_maintenance = under_maintenance;
        }
        // Capacity or maintenance changes can shift the derived status.
        state.sync_room_status(event.room_id)?;
        state
            .rooms
            .get(&event.room_id)
            .cloned()
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        let Some(room) = state.rooms.get(&room_id) else {
            return Err(AppError::EntityNotFound("Room not found".into()));
        };
        if state.assignments.values().any(|a| a.room_id == room_id) {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete room with active or past assignments.".into(),
            ));
        }
        if room.current_occupancy > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete an occupied room.".into(),
            ));
        }
        state.rooms.remove(&room_id);
        Ok(())
    }
}
