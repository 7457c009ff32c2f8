use chrono::{DateTime, Utc};
use derive_new::new;

use crate::model::id::ActivityLogId;

#[derive(Debug, Clone)]
pub struct ActivityLog {
    pub id: ActivityLogId,
    pub username: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, new)]
pub struct CreateActivityLog {
    pub username: String,
    pub action: String,
}
