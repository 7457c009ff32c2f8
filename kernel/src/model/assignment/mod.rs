pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{AssignmentId, EmployeeId, RoomId};

/// One employee occupying one room over an interval. Rows are never
/// deleted: checkout stamps `check_out_date`, reassignment moves the room
/// reference while the assignment stays active.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: AssignmentId,
    pub employee_id: EmployeeId,
    pub room_id: RoomId,
    pub check_in_date: DateTime<Utc>,
    pub expected_check_out_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
}

impl Assignment {
    pub fn is_active(&self) -> bool {
        self.check_out_date.is_none()
    }
}

#[derive(Debug)]
pub struct ReassignOutcome {
    pub old_assignment: Assignment,
    pub new_assignment: Assignment,
}
