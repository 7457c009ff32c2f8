use async_trait::async_trait;
use derive_new::new;
use kernel::model::employee::event::{CreateEmployee, UpdateEmployee};
use kernel::model::employee::{Employee, EmployeeStatus};
use kernel::model::id::EmployeeId;
use kernel::repository::employee::EmployeeRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::employee::EmployeeRow;
use crate::database::ConnectionPool;

const EMPLOYEE_COLUMNS: &str = r#"
    id, staff_number, first_name, last_name, national_id,
    job_title, department, phone, status, contract_end_date
"#;

#[derive(new)]
pub struct EmployeeRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EmployeeRepository for EmployeeRepositoryImpl {
    async fn create(&self, event: CreateEmployee) -> AppResult<Employee> {
        let duplicates: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employees WHERE staff_number = $1 OR national_id = $2",
        )
        .bind(&event.staff_number)
        .bind(&event.national_id)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if duplicates > 0 {
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
        sqlx::query(
            r#"
                INSERT INTO employees
                (id, staff_number, first_name, last_name, national_id,
                 job_title, department, phone, status, contract_end_date)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(employee.id)
        .bind(&employee.staff_number)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.national_id)
        .bind(&employee.job_title)
        .bind(&employee.department)
        .bind(&employee.phone)
        .bind(employee.status)
        .bind(employee.contract_end_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(
            employee_id = %employee.id,
            staff_number = %employee.staff_number,
            "Created employee"
        );
        Ok(employee)
    }

    async fn find_all(&self) -> AppResult<Vec<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY staff_number"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Employee::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, employee_id: EmployeeId) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, EmployeeRow>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(employee_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Employee::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateEmployee) -> AppResult<Employee> {
        let mut employee = self
            .find_by_id(event.employee_id)
            .await?
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

        let res = sqlx::query(
            r#"
                UPDATE employees
                SET staff_number = $2, first_name = $3, last_name = $4,
                    national_id = $5, job_title = $6, department = $7,
                    phone = $8, status = $9, contract_end_date = $10
                WHERE id = $1
            "#,
        )
        .bind(employee.id)
        .bind(&employee.staff_number)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.national_id)
        .bind(&employee.job_title)
        .bind(&employee.department)
        .bind(&employee.phone)
        .bind(employee.status)
        .bind(employee.contract_end_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No employee record has been updated".into(),
            ));
        }

        tracing::info!(employee_id = %employee.id, "Updated employee");
        Ok(employee)
    }

    async fn delete(&self, employee_id: EmployeeId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = $1")
            .bind(employee_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if exists < 1 {
            return Err(AppError::EntityNotFound("Employee not found".into()));
        }

        let active: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM assignments WHERE employee_id = $1 AND check_out_date IS NULL",
        )
        .bind(employee_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if active > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete an employee with an active room assignment.".into(),
            ));
        }

        sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(employee_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(%employee_id, "Deleted employee");
        Ok(())
    }
}
