use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::activity::{ActivityLog, CreateActivityLog};

#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn append(&self, event: CreateActivityLog) -> AppResult<ActivityLog>;
    // Newest first.
    async fn find_all(&self) -> AppResult<Vec<ActivityLog>>;
}
