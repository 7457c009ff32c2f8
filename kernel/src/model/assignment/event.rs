use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::{AssignmentId, EmployeeId, RoomId};

#[derive(Debug, new)]
pub struct CreateAssignment {
    pub employee_id: EmployeeId,
    pub room_id: RoomId,
    pub check_in_date: DateTime<Utc>,
    pub expected_check_out_date: Option<DateTime<Utc>>,
}

#[derive(Debug, new)]
pub struct ReassignEmployee {
    pub assignment_id: AssignmentId,
    pub new_room_id: RoomId,
}

#[derive(Debug, new)]
pub struct CheckoutEmployee {
    pub assignment_id: AssignmentId,
    pub check_out_date: Option<DateTime<Utc>>,
}
