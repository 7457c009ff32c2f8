use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::MaintenanceRequestId;
use crate::model::maintenance::event::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use crate::model::maintenance::MaintenanceRequest;

#[async_trait]
pub trait MaintenanceRepository: Send + Sync {
    async fn create(&self, event: CreateMaintenanceRequest) -> AppResult<MaintenanceRequest>;
    async fn find_all(&self) -> AppResult<Vec<MaintenanceRequest>>;
    async fn find_by_id(
        &self,
        request_id: MaintenanceRequestId,
    ) -> AppResult<Option<MaintenanceRequest>>;
    async fn update(&self, event: UpdateMaintenanceRequest) -> AppResult<MaintenanceRequest>;
    async fn delete(&self, request_id: MaintenanceRequestId) -> AppResult<()>;
}
