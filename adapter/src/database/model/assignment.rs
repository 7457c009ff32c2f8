use chrono::{DateTime, Utc};
use kernel::model::assignment::Assignment;
use kernel::model::id::{AssignmentId, EmployeeId, RoomId};

#[derive(sqlx::FromRow)]
pub struct AssignmentRow {
    pub id: AssignmentId,
    pub employee_id: EmployeeId,
    pub room_id: RoomId,
    pub check_in_date: DateTime<Utc>,
    pub expected_check_out_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
}

impl From<AssignmentRow> for Assignment {
    fn from(value: AssignmentRow) -> Self {
        let AssignmentRow {
            id,
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
            check_out_date,
        } = value;
        Assignment {
            id,
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
            check_out_date,
        }
    }
}
