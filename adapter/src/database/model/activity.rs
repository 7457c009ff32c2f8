use chrono::{DateTime, Utc};
use kernel::model::activity::ActivityLog;
use kernel::model::id::ActivityLogId;

#[derive(sqlx::FromRow)]
pub struct ActivityLogRow {
    pub id: ActivityLogId,
    pub username: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLogRow> for ActivityLog {
    fn from(value: ActivityLogRow) -> Self {
        let ActivityLogRow {
            id,
            username,
            action,
            timestamp,
        } = value;
        ActivityLog {
            id,
            username,
            action,
            timestamp,
        }
    }
}
