use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::activity::{ActivityLog, CreateActivityLog};
use kernel::model::id::ActivityLogId;
use kernel::repository::activity::ActivityLogRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::activity::ActivityLogRow;
use crate::database::ConnectionPool;

#[derive(new)]
pub struct ActivityLogRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ActivityLogRepository for ActivityLogRepositoryImpl {
    async fn append(&self, event: CreateActivityLog) -> AppResult<ActivityLog> {
        let log = ActivityLog {
            id: ActivityLogId::new(),
            username: event.username,
            action: event.action,
            timestamp: Utc::now(),
        };
        sqlx::query(
            r#"
                INSERT INTO activity_logs (id, username, action, timestamp)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(log.id)
        .bind(&log.username)
        .bind(&log.action)
        .bind(log.timestamp)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(log)
    }

    async fn find_all(&self) -> AppResult<Vec<ActivityLog>> {
        sqlx::query_as::<_, ActivityLogRow>(
            r#"
                SELECT id, username, action, timestamp
                FROM activity_logs
                ORDER BY timestamp DESC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(ActivityLog::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}
