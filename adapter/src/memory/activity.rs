use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::activity::{ActivityLog, CreateActivityLog};
use kernel::model::id::ActivityLogId;
use kernel::repository::activity::ActivityLogRepository;
use shared::error::AppResult;

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryActivityLogRepository {
    store: InMemoryStore,
}

#[async_trait]
impl ActivityLogRepository for InMemoryActivityLogRepository {
    async fn append(&self, event: CreateActivityLog) -> AppResult<ActivityLog> {
        let mut state = self.store.lock().await;
        let log = ActivityLog {
            id: ActivityLogId::new(),
            username: event.username,
            action: event.action,
            timestamp: Utc::now(),
        };
        state.activity_logs.push(log.clone());
        Ok(log)
    }

    async fn find_all(&self) -> AppResult<Vec<ActivityLog>> {
        let state = self.store.lock().await;
        let mut logs = state.activity_logs.clone();
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(logs)
    }
}
