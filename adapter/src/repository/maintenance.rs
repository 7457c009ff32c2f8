use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::MaintenanceRequestId;
use kernel::model::maintenance::event::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use kernel::model::maintenance::{MaintenanceRequest, MaintenanceStatus};
use kernel::repository::maintenance::MaintenanceRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::maintenance::MaintenanceRequestRow;
use crate::database::ConnectionPool;

const REQUEST_COLUMNS: &str = r#"
    id, room_id, problem_type, description, status, due_date, reported_at
"#;

#[derive(new)]
pub struct MaintenanceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MaintenanceRepository for MaintenanceRepositoryImpl {
    async fn create(&self, event: CreateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let room: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE id = $1")
            .bind(event.room_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if room < 1 {
            return Err(AppError::EntityNotFound("Room not found".into()));
        }

        let request = MaintenanceRequest {
            id: MaintenanceRequestId::new(),
            room_id: event.room_id,
            problem_type: event.problem_type,
            description: event.description,
            status: MaintenanceStatus::Pending,
            due_date: event.due_date,
            reported_at: Utc::now(),
        };
        sqlx::query(
            r#"
                INSERT INTO maintenance_requests
                (id, room_id, problem_type, description, status, due_date, reported_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(request.id)
        .bind(request.room_id)
        .bind(&request.problem_type)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.due_date)
        .bind(request.reported_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(request_id = %request.id, room_id = %request.room_id, "Created maintenance request");
        Ok(request)
    }

    async fn find_all(&self) -> AppResult<Vec<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM maintenance_requests ORDER BY reported_at DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(MaintenanceRequest::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(
        &self,
        request_id: MaintenanceRequestId,
    ) -> AppResult<Option<MaintenanceRequest>> {
        sqlx::query_as::<_, MaintenanceRequestRow>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM maintenance_requests WHERE id = $1"
        ))
        .bind(request_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(MaintenanceRequest::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateMaintenanceRequest) -> AppResult<MaintenanceRequest> {
        let mut request = self
            .find_by_id(event.request_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Maintenance request not found".into()))?;

        if let Some(problem_type) = event.problem_type {
            request.problem_type = problem_type;
        }
        if let Some(description) = event.description {
            request.description = description;
        }
        if let Some(status) = event.status {
            request.status = status;
        }
        if event.due_date.is_some() {
            request.due_date = event.due_date;
        }

        let res = sqlx::query(
            r#"
                UPDATE maintenance_requests
                SET problem_type = $2, description = $3, status = $4, due_date = $5
                WHERE id = $1
            "#,
        )
        .bind(request.id)
        .bind(&request.problem_type)
        .bind(&request.description)
        .bind(request.status)
        .bind(request.due_date)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No maintenance request record has been updated".into(),
            ));
        }

        tracing::info!(request_id = %request.id, "Updated maintenance request");
        Ok(request)
    }

    async fn delete(&self, request_id: MaintenanceRequestId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(request_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "Maintenance request not found".into(),
            ));
        }

        tracing::info!(%request_id, "Deleted maintenance request");
        Ok(())
    }
}
