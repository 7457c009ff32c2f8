use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::assignment::event::{CheckoutEmployee, CreateAssignment, ReassignEmployee};
use crate::model::assignment::{Assignment, ReassignOutcome};

/// The occupancy ledger. Each operation mutates assignment rows and room
/// occupancy/status together and is atomic: either every write lands or
/// none does. A failed precondition aborts the whole operation, so callers
/// never observe partial writes.
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Houses an employee. Fails if the employee already has an active
    /// assignment or the room is at capacity.
    async fn assign(&self, event: CreateAssignment) -> AppResult<Assignment>;

    /// Moves an active assignment to another room, vacating the old one.
    async fn reassign(&self, event: ReassignEmployee) -> AppResult<ReassignOutcome>;

    /// Closes an active assignment and frees its place in the room.
    /// Checking out twice fails with "Active assignment not found".
    async fn checkout(&self, event: CheckoutEmployee) -> AppResult<Assignment>;

    async fn find_all(&self) -> AppResult<Vec<Assignment>>;
}
