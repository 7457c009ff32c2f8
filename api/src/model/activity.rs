use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::activity::{ActivityLog, CreateActivityLog};
use kernel::model::id::ActivityLogId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityLogRequest {
    #[garde(length(min = 1))]
    pub username: String,
    #[garde(length(min = 1))]
    pub action: String,
}

impl From<CreateActivityLogRequest> for CreateActivityLog {
    fn from(value: CreateActivityLogRequest) -> Self {
        let CreateActivityLogRequest { username, action } = value;
        CreateActivityLog { username, action }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogResponse {
    pub id: ActivityLogId,
    pub username: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl From<ActivityLog> for ActivityLogResponse {
    fn from(value: ActivityLog) -> Self {
        let ActivityLog {
            id,
            username,
            action,
            timestamp,
        } = value;
        Self {
            id,
            username,
            action,
            timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogsResponse {
    pub items: Vec<ActivityLogResponse>,
}

impl From<Vec<ActivityLog>> for ActivityLogsResponse {
    fn from(value: Vec<ActivityLog>) -> Self {
        Self {
            items: value.into_iter().map(ActivityLogResponse::from).collect(),
        }
    }
}
