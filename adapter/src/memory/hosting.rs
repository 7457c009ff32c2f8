use async_trait::async_trait;
use derive_new::new;
use kernel::model::hosting::event::{CreateHosting, UpdateHosting};
use kernel::model::hosting::{Hosting, HostingStatus};
use kernel::model::id::HostingId;
use kernel::repository::hosting::HostingRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryHostingRepository {
    store: InMemoryStore,
}

#[async_trait]
impl HostingRepository for InMemoryHostingRepository {
    async fn create(&self, event: CreateHosting) -> AppResult<Hosting> {
        let mut state = self.store.lock().await;

        if !state.employees.contains_key(&event.employee_id) {
            return Err(AppError::EntityNotFound("Employee not found".into()));
        }

        let room_id = state
            .active_assignment_for(event.employee_id)
            .map(|a| a.room_id);
        let guest_count = event.guests.len() as i32;

        // Guests join the host room's occupancy without a capacity check
        // and without touching the room status.
        let applied_guest_count = match room_id {
            Some(room_id) if guest_count > 0 => {
                if let Some(room) = state.rooms.get_mut(&room_id) {
                    room.current_occupancy += guest_count;
                }
                guest_count
            }
            _ => 0,
        };

        let hosting = Hosting {
            id: HostingId::new(),
            employee_id: event.employee_id,
            room_id,
            guest_first_name: event.guest_first_name,
            guest_last_name: event.guest_last_name,
            guests: event.guests,
            applied_guest_count,
            start_date: event.start_date,
            end_date: event.end_date,
            notes: event.notes,
            status: HostingStatus::Active,
        };
        state.hostings.insert(hosting.id, hosting.clone());

        tracing::info!(
            hosting_id = %hosting.id,
            employee_id = %hosting.employee_id,
            guest_count,
            "Created hosting"
        );
        Ok(hosting)
    }

    async fn find_all(&self) -> AppResult<Vec<Hosting>> {
        let state = self.store.lock().await;
        let mut hostings: Vec<Hosting> = state.hostings.values().cloned().collect();
        hostings.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(hostings)
    }

    async fn find_by_id(&self, hosting_id: HostingId) -> AppResult<Option<Hosting>> {
        let state = self.store.lock().await;
        Ok(state.hostings.get(&hosting_id).cloned())
    }

    async fn update(&self, event: UpdateHosting) -> AppResult<Hosting> {
        let mut state = self.store.lock().await;

        let mut hosting = state
            .hostings
            .get(&event.hosting_id)
            .cloned()
            .ok_or_else(|| AppError::EntityNotFound("Hosting not found".into()))?;

        let completing = event.status == Some(HostingStatus::Completed)
            && hosting.status != HostingStatus::Completed;

        if let Some(guest_first_name) = event.guest_first_name {
            hosting.guest_first_name = guest_first_name;
        }
        if let Some(guest_last_name) = event.guest_last_name {
            hosting.guest_last_name = guest_last_name;
        }
        if let Some(start_date) = event.start_date {
            hosting.start_date = start_date;
        }
        if let Some(end_date) = event.end_date {
            hosting.end_date = end_date;
        }
        if event.notes.is_some() {
            hosting.notes = event.notes;
        }
        if let Some(status) = event.status {
            hosting.status = status;
        }

        // First completion gives the applied guest count back to the host
        // room; repeating the transition adjusts nothing.
        if completing && hosting.applied_guest_count > 0 {
            if let Some(room_id) = hosting.room_id {
                state.adjust_occupancy(room_id, -hosting.applied_guest_count)?;
            }
            hosting.applied_guest_count = 0;
        }

        state.hostings.insert(hosting.id, hosting.clone());

        tracing::info!(hosting_id = %hosting.id, "Updated hosting");
        Ok(hosting)
    }

    async fn delete(&self, hosting_id: HostingId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        state
            .hostings
            .remove(&hosting_id)
            .ok_or_else(|| AppError::EntityNotFound("Hosting not found".into()))?;

        tracing::info!(%hosting_id, "Deleted hosting");
        Ok(())
    }
}
