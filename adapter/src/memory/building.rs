use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::building::event::{CreateBuilding, CreateFloor, UpdateBuilding, UpdateFloor};
use kernel::model::building::{Building, Floor};
use kernel::model::id::{BuildingId, FloorId};
use kernel::repository::building::{BuildingRepository, FloorRepository};
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryBuildingRepository {
    store: InMemoryStore,
}

#[async_trait]
impl BuildingRepository for InMemoryBuildingRepository {
    async fn create(&self, event: CreateBuilding) -> AppResult<Building> {
        let building = Building {
            id: BuildingId::new(),
            name: event.name,
            address: event.address,
            created_at: Utc::now(),
        };
        let mut state = self.store.lock().await;
        state.buildings.insert(building.id, building.clone());
        Ok(building)
    }

    async fn find_all(&self) -> AppResult<Vec<Building>> {
        let state = self.store.lock().await;
        let mut buildings: Vec<Building> = state.buildings.values().cloned().collect();
        buildings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(buildings)
    }

    async fn find_by_id(&self, building_id: BuildingId) -> AppResult<Option<Building>> {
        let state = self.store.lock().await;
        Ok(state.buildings.get(&building_id).cloned())
    }

    async fn update(&self, event: UpdateBuilding) -> AppResult<Building> {
        let mut state = self.store.lock().await;
        let building = state
            .buildings
            .get_mut(&event.building_id)
            .ok_or_else(|| AppError::EntityNotFound("Building not found".into()))?;
        if let Some(name) = event.name {
            building.name = name;
        }
        if let Some(address) = event.address {
            building.address = address;
        }
        Ok(building.clone())
    }

    async fn delete(&self, building_id: BuildingId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        if !state.buildings.contains_key(&building_id) {
            return Err(AppError::EntityNotFound("Building not found".into()));
        }
        let floor_ids: Vec<FloorId> = state
            .floors
            .values()
            .filter(|f| f.building_id == building_id)
            .map(|f| f.id)
            .collect();
        let has_rooms = state
            .rooms
            .values()
            .any(|r| floor_ids.contains(&r.floor_id));
        if has_rooms {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete building with rooms. Please delete rooms first.".into(),
            ));
        }
        for floor_id in floor_ids {
            state.floors.remove(&floor_id);
        }
        state.buildings.remove(&building_id);
        Ok(())
    }
}

#[derive(new)]
pub struct InMemoryFloorRepository {
    store: InMemoryStore,
}

#[async_trait]
impl FloorRepository for InMemoryFloorRepository {
    async fn create(&self, event: CreateFloor) -> AppResult<Floor> {
        let mut state = self.store.lock().await;
        if !state.buildings.contains_key(&event.building_id) {
            return Err(AppError::EntityNotFound("Building not found".into()));
        }
        let floor = Floor {
            id: FloorId::new(),
            building_id: event.building_id,
            floor_number: event.floor_number,
            created_at: Utc::now(),
        };
        state.floors.insert(floor.id, floor.clone());
        Ok(floor)
    }

    async fn find_all(&self) -> AppResult<Vec<Floor>> {
        let state = self.store.lock().await;
        let mut floors: Vec<Floor> = state.floors.values().cloned().collect();
        floors.sort_by_key(|f| f.floor_number);
        Ok(floors)
    }

    async fn find_by_building(&self, building_id: BuildingId) -> AppResult<Vec<Floor>> {
        let state = self.store.lock().await;
        let mut floors: Vec<Floor> = state
            .floors
            .values()
            .filter(|f| f.building_id == building_id)
            .cloned()
            .collect();
        floors.sort_by_key(|f| f.floor_number);
        Ok(floors)
    }

    async fn find_by_id(&self, floor_id: FloorId) -> AppResult<Option<Floor>> {
        let state = self.store.lock().await;
        Ok(state.floors.get(&floor_id).cloned())
    }

    async fn update(&self, event: UpdateFloor) -> AppResult<Floor> {
        let mut state = self.store.lock().await;
        let floor = state
            .floors
            .get_mut(&event.floor_id)
            .ok_or_else(|| AppError::EntityNotFound("Floor not found".into()))?;
        if let Some(floor_number) = event.floor_number {
            floor.floor_number = floor_number;
        }
        Ok(floor.clone())
    }

    async fn delete(&self, floor_id: FloorId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        if !state.floors.contains_key(&floor_id) {
            return Err(AppError::EntityNotFound("Floor not found".into()));
        }
        if state.rooms.values().any(|r| r.floor_id == floor_id) {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete floor with rooms.".into(),
            ));
        }
        state.floors.remove(&floor_id);
        Ok(())
    }
}
