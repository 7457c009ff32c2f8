use async_trait::async_trait;
use derive_new::new;
use kernel::model::employee::event::{CreateEmployee, UpdateEmployee};
use kernel::model::employee::{Employee, EmployeeStatus};
use kernel::model::id::EmployeeId;
use kernel::repository::employee::EmployeeRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryEmployeeRepository {
    store: InMemoryStore,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, event: CreateEmployee) -> AppResult<Employee> {
        let mut state = self.store.lock().await;
        let duplicate = state
            .employees
            .values()
            .any(|e| e.staff_number == event.staff_number || e.national_id == event.national_id);
        if duplicate {
            return Err(AppError::UnprocessableEntity(
                "Employee with this ID or National ID already exists.".into(),
            ));
        }
        let employee = Employee {
            id: EmployeeId::new(),
            staff_number: event.staff_number,
            first_name: event.first_name,
            last_name: event.last_name,
            national_id: event.national_id,
            job_title: event.job_title,
            department: event.department,
            phone: event.phone,
            status: EmployeeStatus::Active,
            contract_end_date: event.contract_end_date,
        };
        state.employees.insert(employee.id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        let state = self.store.lock().await;
        let mut employees: Vec<Employee> = state.employees.values().cloned().collect();
        employees.sort_by(|a, b| a.staff_number.cmp(&b.staff_number));
        Ok(employees)
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        let state = self.store.lock().await;
        Ok(state.employees.get(&employee_id).cloned())
    }

    async fn update(&self, event: UpdateEmployee) -> AppResult<Employee> {
        let mut state = self.store.lock().await;
        let employee = state
            .employees
            .get_mut(&event.employee_id)
            .ok_or_else(|| AppError::EntityNotFound("Employee not found".into()))?;
        if let Some(staff_number) = event.staff_number {
            employee.staff_number = staff_number;
        }
        if let Some(first_name) = event.first_name {
            employee.first_name = first_name;
        }
        if let Some(last_name) = event.last_name {
            employee.last_name = last_name;
        }
        if let Some(national_id) = event.national_id {
            employee.national_id = national_id;
        }
        if let Some(job_title) = event.job_title {
            employee.job_title = job_title;
        }
        if let Some(department) = event.department {
            employee.department = department;
        }
        if event.phone.is_some() {
            employee.phone = event.phone;
        }
        if let Some(status) = event.status {
            employee.status = status;
        }
        if let Some(contract_end_date) = event.contract_end_date {
            employee.contract_end_date = contract_end_date;
        }
        Ok(employee.clone())
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<()> {
        let mut state = self.store.lock().await;
        if !state.employees.contains_key(&employee_id) {
            return Err(AppError::EntityNotFound("Employee not found".into()));
        }
        if state.active_assignment_for(employee_id).is_some() {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete an employee with an active room assignment.".into(),
            ));
        }
        state.employees.remove(&employee_id);
        Ok(())
    }
}
