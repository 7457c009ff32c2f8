pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::id::EmployeeId;

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub job_title: String,
    pub department: String,
    pub phone: Option<String>,
    pub status: EmployeeStatus,
    pub contract_end_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "employee_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeStatus {
    Active,
    Inactive,
}
