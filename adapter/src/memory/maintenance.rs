use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::MaintenanceRequestId;
use kernel::model::maintenance::event::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use kernel::model::maintenance::{MaintenanceRequest, MaintenanceStatus};
use kernel::repository::maintenance::MaintenanceRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryMaintenanceRepository {
    store: InMemoryStore,
}

#[async_trait]
impl MaintenanceRepository for InMemoryMaintenanceRepository {
    async fn create(&self, event: CreateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let mut state = self.store.lock().await;

        if !state.rooms.contains_key(&event.room_id) {
            return Err(AppError::EntityNotFound("Room not found".into()));
        }

        let request = MaintenanceRequest {
            id: MaintenanceRequestId::new(),
            room_id: event.room_id,
            problem_type: event.problem_type,
            description: event.description,
            status: MaintenanceStatus::Pending,
            due_date: event.due_date,
            reported_at: Utc::now(),
        };
        state.maintenance_requests.insert(request.id, request.clone());

        tracing::info!(request_id = %request.id, room_id = %request.room_id, "Created maintenance request");
        Ok(request)
    }

    async fn find_all(&self) -> AppResult<Vec<MaintenanceRequest>> {
        let state = self.store.lock().await;
        let mut requests: Vec<MaintenanceRequest> =
            state.maintenance_requests.values().cloned().collect();
        requests.sort_by(|a, b| b.reported_at.cmp(&a.reported_at));
        Ok(requests)
    }

    async fn find_by_id(
        &self,
        request_id: MaintenanceRequestId,
    ) -> AppResult<Option<MaintenanceRequest>> {
        let state = self.store.lock().await;
        Ok(state.maintenance_requests.get(&request_id).cloned())
    }

    async fn update(&self, event: UpdateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let mut state = self.store.lock().await;

        let request = state
            .maintenance_requests
            .get_mut(&event.request_id)
            .ok_or_else(|| AppError::EntityNotFound("Maintenance request not found".into()))?;

        if let Some(problem_type) = event.problem_type {
            request.problem_type = problem_type;
        }
        if let Some(description) = event.description {
            request.description = description;
        }
        if let Some(status) = event.status {
            request.status = status;
        }
        if event.due_date.is_some() {
            request.due_date = event.due_date;
        }
        let request = request.clone();

        tracing::info!(request_id = %request.id, "Updated maintenance request");
        Ok(request)
    }

    async fn delete(&self, request_id: MaintenanceRequestId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        state
            .maintenance_requests
            .remove(&request_id)
            .ok_or_else(|| AppError::EntityNotFound("Maintenance request not found".into()))?;

        tracing::info!(%request_id, "Deleted maintenance request");
        Ok(())
    }
}
