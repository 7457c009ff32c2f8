use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::assignment::event::{CheckoutEmployee, CreateAssignment, ReassignEmployee};
use kernel::model::assignment::{Assignment, ReassignOutcome};
use kernel::model::id::{AssignmentId, EmployeeId, RoomId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssignmentRequest {
    #[garde(skip)]
    pub employee_id: EmployeeId,
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(skip)]
    pub check_in_date: DateTime<Utc>,
    #[garde(skip)]
    pub expected_check_out_date: Option<DateTime<Utc>>,
}

impl From<CreateAssignmentRequest> for CreateAssignment {
    fn from(value: CreateAssignmentRequest) -> Self {
        let CreateAssignmentRequest {
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
        } = value;
        CreateAssignment {
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReassignEmployeeRequest {
    #[garde(skip)]
    pub new_room_id: RoomId,
}

#[derive(new)]
pub struct ReassignEmployeeRequestWithId(AssignmentId, ReassignEmployeeRequest);

impl From<ReassignEmployeeRequestWithId> for ReassignEmployee {
    fn from(value: ReassignEmployeeRequestWithId) -> Self {
        let ReassignEmployeeRequestWithId(
            assignment_id,
            ReassignEmployeeRequest { new_room_id },
        ) = value;
        ReassignEmployee {
            assignment_id,
            new_room_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutEmployeeRequest {
    #[garde(skip)]
    pub check_out_date: Option<DateTime<Utc>>,
}

#[derive(new)]
pub struct CheckoutEmployeeRequestWithId(AssignmentId, CheckoutEmployeeRequest);

impl From<CheckoutEmployeeRequestWithId> for CheckoutEmployee {
    fn from(value: CheckoutEmployeeRequestWithId) -> Self {
        let CheckoutEmployeeRequestWithId(
            assignment_id,
            CheckoutEmployeeRequest { check_out_date },
        ) = value;
        CheckoutEmployee {
            assignment_id,
            check_out_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub id: AssignmentId,
    pub employee_id: EmployeeId,
    pub room_id: RoomId,
    pub check_in_date: DateTime<Utc>,
    pub expected_check_out_date: Option<DateTime<Utc>>,
    pub check_out_date: Option<DateTime<Utc>>,
}

impl From<Assignment> for AssignmentResponse {
    fn from(value: Assignment) -> Self {
        let Assignment {
            id,
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
            check_out_date,
        } = value;
        Self {
            id,
            employee_id,
            room_id,
            check_in_date,
            expected_check_out_date,
            check_out_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentsResponse {
    pub items: Vec<AssignmentResponse>,
}

impl From<Vec<Assignment>> for AssignmentsResponse {
    fn from(value: Vec<Assignment>) -> Self {
        Self {
            items: value.into_iter().map(AssignmentResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignResponse {
    pub old_assignment: AssignmentResponse,
    pub new_assignment: AssignmentResponse,
}

impl From<ReassignOutcome> for ReassignResponse {
    fn from(value: ReassignOutcome) -> Self {
        let ReassignOutcome {
            old_assignment,
            new_assignment,
        } = value;
        Self {
            old_assignment: old_assignment.into(),
            new_assignment: new_assignment.into(),
        }
    }
}
