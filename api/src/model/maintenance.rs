use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::id::{MaintenanceRequestId, RoomId};
use kernel::model::maintenance::event::{CreateMaintenanceRequest, UpdateMaintenanceRequest};
use kernel::model::maintenance::{MaintenanceRequest, MaintenanceStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMaintenanceRequest {
    #[garde(skip)]
    pub room_id: RoomId,
    #[garde(length(min = 1))]
    pub problem_type: String,
    #[garde(length(min = 1))]
    pub description: String,
    #[garde(skip)]
    pub due_date: Option<DateTime<Utc>>,
}

impl From<RegisterMaintenanceRequest> for CreateMaintenanceRequest {
    fn from(value: RegisterMaintenanceRequest) -> Self {
        let RegisterMaintenanceRequest {
            room_id,
            problem_type,
            description,
            due_date,
        } = value;
        CreateMaintenanceRequest {
            room_id,
            problem_type,
            description,
            due_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ModifyMaintenanceRequest {
    #[garde(skip)]
    pub problem_type: Option<String>,
    #[garde(skip)]
    pub description: Option<String>,
    #[garde(skip)]
    pub status: Option<MaintenanceStatus>,
    #[garde(skip)]
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(new)]
pub struct ModifyMaintenanceRequestWithId(MaintenanceRequestId, ModifyMaintenanceRequest);

impl From<ModifyMaintenanceRequestWithId> for UpdateMaintenanceRequest {
    fn from(value: ModifyMaintenanceRequestWithId) -> Self {
        let ModifyMaintenanceRequestWithId(
            request_id,
            ModifyMaintenanceRequest {
                problem_type,
                description,
                status,
                due_date,
            },
        ) = value;
        UpdateMaintenanceRequest {
            request_id,
            problem_type,
            description,
            status,
            due_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestResponse {
    pub id: MaintenanceRequestId,
    pub room_id: RoomId,
    pub problem_type: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub due_date: Option<DateTime<Utc>>,
    pub reported_at: DateTime<Utc>,
}

impl From<MaintenanceRequest> for MaintenanceRequestResponse {
    fn from(value: MaintenanceRequest) -> Self {
        let MaintenanceRequest {
            id,
            room_id,
            problem_type,
            description,
            status,
            due_date,
            reported_at,
        } = value;
        Self {
            id,
            room_id,
            problem_type,
            description,
            status,
            due_date,
            reported_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequestsResponse {
    pub items: Vec<MaintenanceRequestResponse>,
}

impl From<Vec<MaintenanceRequest>> for MaintenanceRequestsResponse {
    fn from(value: Vec<MaintenanceRequest>) -> Self {
        Self {
            items: value
                .into_iter()
                .map(MaintenanceRequestResponse::from)
                .collect(),
        }
    }
}
