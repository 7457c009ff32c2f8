use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::employee::event::{CreateEmployee, UpdateEmployee};
use crate::model::employee::Employee;
use crate::model::id::EmployeeId;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn create(&self, event: CreateEmployee) -> AppResult<Employee>;
    async fn find_all(&self) -> AppResult<Vec<Employee>>;
    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>>;
    async fn update(&self, event: UpdateEmployee) -> AppResult<Employee>;
    // Refuses to delete an employee who is actively housed.
    async fn delete(&self, employee_id: EmployeeId) -> AppResult<()>;
}
