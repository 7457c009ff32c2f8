//! In-memory storage backend.
//!
//! Every table lives behind one async mutex, so a repository operation that
//! touches several tables is naturally atomic: it holds the lock for the
//! whole critical section, which gives the occupancy ledger the same
//! all-or-nothing behavior the Postgres backend gets from a transaction.
//! Used by the test suite and available for ephemeral deployments.

pub mod activity;
pub mod assignment;
pub mod building;
pub mod employee;
pub mod health;
pub mod hosting;
pub mod maintenance;
pub mod reservation;
pub mod room;
pub mod settings;

use std::collections::HashMap;
use std::sync::Arc;

use kernel::model::activity::ActivityLog;
use kernel::model::assignment::Assignment;
use kernel::model::building::{Building, Floor};
use kernel::model::employee::Employee;
use kernel::model::hosting::Hosting;
use kernel::model::id::{
    AssignmentId, BuildingId, EmployeeId, FloorId, HostingId, MaintenanceRequestId, ReservationId,
    RoomId,
};
use kernel::model::maintenance::MaintenanceRequest;
use kernel::model::reservation::Reservation;
use kernel::model::room::{derive_status, Room};
use kernel::model::settings::SystemSettings;
use shared::error::{AppError, AppResult};
use tokio::sync::{Mutex, MutexGuard};

#[derive(Default)]
pub(crate) struct State {
    pub buildings: HashMap<BuildingId, Building>,
    pub floors: HashMap<FloorId, Floor>,
    pub rooms: HashMap<RoomId, Room>,
    pub employees: HashMap<EmployeeId, Employee>,
    pub assignments: HashMap<AssignmentId, Assignment>,
    pub hostings: HashMap<HostingId, Hosting>,
    pub reservations: HashMap<ReservationId, Reservation>,
    pub maintenance_requests: HashMap<MaintenanceRequestId, MaintenanceRequest>,
    pub activity_logs: Vec<ActivityLog>,
    pub settings: SystemSettings,
}

impl State {
    pub fn active_assignment_for(&self, employee_id: EmployeeId) -> Option<&Assignment> {
        self.assignments
            .values()
            .find(|a| a.employee_id == employee_id && a.is_active())
    }

    // Never lets occupancy go negative.
    pub fn adjust_occupancy(&mut self, room_id: RoomId, delta: i32) -> AppResult<()> {
        let room = self
            .rooms
            .get_mut(&room_id)
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;
        room.current_occupancy = (room.current_occupancy + delta).max(0);
        Ok(())
    }

    /// Recomputes a room's status from its source-of-truth counts. The
    /// guest-hosting path deliberately skips this.
    pub fn sync_room_status(&mut self, room_id: RoomId) -> AppResult<()> {
        let active_reservations = self
            .reservations
            .values()
            .filter(|r| r.room_id == room_id)
            .count() as i64;
        let room = self
            .rooms
            .get_mut(&room_id)
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;
        room.status = derive_status(
            room.current_occupancy,
            room.capacity,
            active_reservations,
            room.under_maintenance,
        );
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    state: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) async fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().await
    }
}
