use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::employee::event::{CreateEmployee, UpdateEmployee};
use kernel::model::employee::{Employee, EmployeeStatus};
use kernel::model::id::EmployeeId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[garde(length(min = 1))]
    pub staff_number: String,
    #[garde(length(min = 1))]
    pub first_name: String,
    #[garde(length(min = 1))]
    pub last_name: String,
    #[garde(length(min = 1))]
    pub national_id: String,
    #[garde(length(min = 1))]
    pub job_title: String,
    #[garde(length(min = 1))]
    pub department: String,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub contract_end_date: DateTime<Utc>,
}

impl From<CreateEmployeeRequest> for CreateEmployee {
    fn from(value: CreateEmployeeRequest) -> Self {
        let CreateEmployeeRequest {
            staff_number,
            first_name,
            last_name,
            national_id,
            job_title,
            department,
            phone,
            contract_end_date,
        } = value;
        CreateEmployee {
            staff_number,
            first_name,
            last_name,
            national_id,
            job_title,
            department,
            phone,
            contract_end_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    #[garde(skip)]
    pub staff_number: Option<String>,
    #[garde(skip)]
    pub first_name: Option<String>,
    #[garde(skip)]
    pub last_name: Option<String>,
    #[garde(skip)]
    pub national_id: Option<String>,
    #[garde(skip)]
    pub job_title: Option<String>,
    #[garde(skip)]
    pub department: Option<String>,
    #[garde(skip)]
    pub phone: Option<String>,
    #[garde(skip)]
    pub status: Option<EmployeeStatus>,
    #[garde(skip)]
    pub contract_end_date: Option<DateTime<Utc>>,
}

#[derive(new)]
pub struct UpdateEmployeeRequestWithId(EmployeeId, UpdateEmployeeRequest);

impl From<UpdateEmployeeRequestWithId> for UpdateEmployee {
    fn from(value: UpdateEmployeeRequestWithId) -> Self {
        let UpdateEmployeeRequestWithId(
            employee_id,
            UpdateEmployeeRequest {
                staff_number,
                first_name,
                last_name,
                national_id,
                job_title,
                department,
                phone,
                status,
                contract_end_date,
            },
        ) = value;
        UpdateEmployee {
            employee_id,
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
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

impl From<Employee> for EmployeeResponse {
    fn from(value: Employee) -> Self {
        let Employee {
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
        Self {
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

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeesResponse {
    pub items: Vec<EmployeeResponse>,
}

impl From<Vec<Employee>> for EmployeesResponse {
    fn from(value: Vec<Employee>) -> Self {
        Self {
            items: value.into_iter().map(EmployeeResponse::from).collect(),
        }
    }
}
