use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::assignment::event::{CheckoutEmployee, CreateAssignment, ReassignEmployee};
use kernel::model::assignment::{Assignment, ReassignOutcome};
use kernel::model::id::AssignmentId;
use kernel::repository::assignment::AssignmentRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

/// Ledger over the in-memory store. Holding the store lock across each
/// whole operation makes the multi-row mutation atomic; a precondition
/// failure returns before any write, so there is nothing to roll back.
#[derive(new)]
pub struct InMemoryAssignmentRepository {
    store: InMemoryStore,
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn assign(&self, event: CreateAssignment) -> AppResult<Assignment> {
        let mut state = self.store.lock().await;

        if !state.employees.contains_key(&event.employee_id) {
            return Err(AppError::EntityNotFound("Employee not found".into()));
        }
        let Some(room) = state.rooms.get(&event.room_id) else {
            return Err(AppError::EntityNotFound("Room not found".into()));
        };
        if state.active_assignment_for(event.employee_id).is_some() {
            return Err(AppError::UnprocessableEntity(
                "Employee is already assigned to a room".into(),
            ));
        }
        if room.current_occupancy >= room.capacity {
            return Err(AppError::UnprocessableEntity(
                "Room is already at full capacity".into(),
            ));
        }

        let assignment = Assignment {
            id: AssignmentId::new(),
            employee_id: event.employee_id,
            room_id: event.room_id,
            check_in_date: event.check_in_date,
            expected_check_out_date: event.expected_check_out_date,
            check_out_date: None,
        };
        state.assignments.insert(assignment.id, assignment.clone());
        state.adjust_occupancy(event.room_id, 1)?;
        state.sync_room_status(event.room_id)?;

        tracing::info!(
            employee_id = %assignment.employee_id,
            room_id = %assignment.room_id,
            "Assigned employee to room"
        );
        Ok(assignment)
    }

    async fn reassign(&self, event: ReassignEmployee) -> AppResult<ReassignOutcome> {
        let mut state = self.store.lock().await;

        let old_assignment = state
            .assignments
            .get(&event.assignment_id)
            .filter(|a| a.is_active())
            .cloned()
            .ok_or_else(|| AppError::EntityNotFound("Active assignment not found".into()))?;

        let Some(new_room) = state.rooms.get(&event.new_room_id) else {
            return Err(AppError::EntityNotFound("New room not found".into()));
        };
        if new_room.current_occupancy >= new_room.capacity {
            return Err(AppError::UnprocessableEntity(
                "New room is at full capacity".into(),
            ));
        }

        let new_assignment = {
            let assignment = state
                .assignments
                .get_mut(&event.assignment_id)
                .ok_or_else(|| AppError::EntityNotFound("Active assignment not found".into()))?;
            assignment.room_id = event.new_room_id;
            assignment.clone()
        };

        state.adjust_occupancy(old_assignment.room_id, -1)?;
        state.adjust_occupancy(event.new_room_id, 1)?;
        // The vacated room keeps an independent maintenance or reservation
        // state instead of being forced back to AVAILABLE.
        state.sync_room_status(old_assignment.room_id)?;
        state.sync_room_status(event.new_room_id)?;

        tracing::info!(
            employee_id = %old_assignment.employee_id,
            old_room_id = %old_assignment.room_id,
            new_room_id = %event.new_room_id,
            "Reassigned employee"
        );
        Ok(ReassignOutcome {
            old_assignment,
            new_assignment,
        })
    }

    async fn checkout(&self, event: CheckoutEmployee) -> AppResult<Assignment> {
        let mut state = self.store.lock().await;

        let check_out_date = event.check_out_date.unwrap_or_else(Utc::now);
        let assignment = {
            let assignment = state
                .assignments
                .get_mut(&event.assignment_id)
                .filter(|a| a.is_active())
                .ok_or_else(|| AppError::EntityNotFound("Active assignment not found".into()))?;
            assignment.check_out_date = Some(check_out_date);
            assignment.clone()
        };

        state.adjust_occupancy(assignment.room_id, -1)?;
        state.sync_room_status(assignment.room_id)?;

        tracing::info!(
            employee_id = %assignment.employee_id,
            room_id = %assignment.room_id,
            "Checked out employee"
        );
        Ok(assignment)
    }

    async fn find_all(&self) -> AppResult<Vec<Assignment>> {
        let state = self.store.lock().await;
        let mut assignments: Vec<Assignment> = state.assignments.values().cloned().collect();
        assignments.sort_by(|a, b| b.check_in_date.cmp(&a.check_in_date));
        Ok(assignments)
    }
}
