use chrono::{DateTime, Utc};
use kernel::model::employee::{Employee, EmployeeStatus};
use kernel::model::id::EmployeeId;

#[derive(sqlx::FromRow)]
pub struct EmployeeRow {
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

impl From<EmployeeRow> for Employee {
    fn from(value: EmployeeRow) -> Self {
        let EmployeeRow {
            id,
            staff_number,
            first_name,
            last_name,
            national_id,
            job_title,
            department,
            phone,
            status,
            contract_end_date,
        } = value;
        Employee {
            id,
            staff_number,
            first_name,
            last_name,
            national_id,
            job_title,
            department,
            phone,
            status,
            contract_end_date,
        }
    }
}
