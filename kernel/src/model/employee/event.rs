use chrono::{DateTime, Utc};
use derive_new::new;

use super::EmployeeStatus;
use crate::model::id::EmployeeId;

#[derive(Debug, new)]
pub struct CreateEmployee {
    pub staff_number: String,
    pub first_name: String,
    pub last_name: String,
    pub national_id: String,
    pub job_title: String,
    pub department: String,
    pub phone: Option<String>,
    pub contract_end_date: DateTime<Utc>,
}

#[derive(Debug, new)]
pub struct UpdateEmployee {
    pub employee_id: EmployeeId,
    pub staff_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_id: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub phone: Option<String>,
    pub status: Option<EmployeeStatus>,
    pub contract_end_date: Option<DateTime<Utc>>,
}
