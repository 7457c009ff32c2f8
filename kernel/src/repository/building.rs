use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::building::event::{CreateBuilding, CreateFloor, UpdateBuilding, UpdateFloor};
use crate::model::building::{Building, Floor};
use crate::model::id::{BuildingId, FloorId};

#[async_trait]
pub trait BuildingRepository: Send + Sync {
    async fn create(&self, event: CreateBuilding) -> AppResult<Building>;
    async fn find_all(&self) -> AppResult<Vec<Building>>;
    async fn find_by_id(&self, building_id: BuildingId) -> AppResult<Option<Building>>;
    async fn update(&self, event: UpdateBuilding) -> AppResult<Building>;
    // Refuses to delete while any room exists on one of the building's floors.
    async fn delete(&self, building_id: BuildingId) -> AppResult<()>;
}

#[async_trait]
pub trait FloorRepository: Send + Sync {
    async fn create(&self, event: CreateFloor) -> AppResult<Floor>;
    async fn find_all(&self) -> AppResult<Vec<Floor>>;
    async fn find_by_building(&self, building_id: BuildingId) -> AppResult<Vec<Floor>>;
    async fn find_by_id(&self, floor_id: FloorId) -> AppResult<Option<Floor>>;
    async fn update(&self, event: UpdateFloor) -> AppResult<Floor>;
    async fn delete(&self, floor_id: FloorId) -> AppResult<()>;
}
