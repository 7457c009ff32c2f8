use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::hosting::event::{CreateHosting, UpdateHosting};
use kernel::model::hosting::{Guest, Hosting, HostingStatus};
use kernel::model::id::{EmployeeId, HostingId, RoomId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateHostingRequest {
    #[garde(skip)]
    pub employee_id: EmployeeId,
    #[garde(length(min = 1))]
    pub guest_first_name: String,
    #[garde(length(min = 1))]
    pub guest_last_name: String,
    #[garde(skip)]
    #[serde(default)]
    pub guests: Vec<Guest>,
    #[garde(skip)]
    pub start_date: DateTime<Utc>,
    #[garde(skip)]
    pub end_date: DateTime<Utc>,
    #[garde(skip)]
    pub notes: Option<String>,
}

impl From<CreateHostingRequest> for CreateHosting {
    fn from(value: CreateHostingRequest) -> Self {
        let CreateHostingRequest {
            employee_id,
            guest_first_name,
            guest_last_name,
            guests,
            start_date,
            end_date,
            notes,
        } = value;
        CreateHosting {
            employee_id,
            guest_first_name,
            guest_last_name,
            guests,
            start_date,
            end_date,
            notes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHostingRequest {
    #[garde(skip)]
    pub guest_first_name: Option<String>,
    #[garde(skip)]
    pub guest_last_name: Option<String>,
    #[garde(skip)]
    pub start_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub end_date: Option<DateTime<Utc>>,
    #[garde(skip)]
    pub notes: Option<String>,
    #[garde(skip)]
    pub status: Option<HostingStatus>,
}

#[derive(new)]
pub struct UpdateHostingRequestWithId(HostingId, UpdateHostingRequest);

impl From<UpdateHostingRequestWithId> for UpdateHosting {
    fn from(value: UpdateHostingRequestWithId) -> Self {
        let UpdateHostingRequestWithId(
            hosting_id,
            UpdateHostingRequest {
                guest_first_name,
                guest_last_name,
                start_date,
                end_date,
                notes,
                status,
            },
        ) = value;
        UpdateHosting {
            hosting_id,
            guest_first_name,
            guest_last_name,
            start_date,
            end_date,
            notes,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingResponse {
    pub id: HostingId,
    pub employee_id: EmployeeId,
    pub room_id: Option<RoomId>,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub guests: Vec<Guest>,
    pub applied_guest_count: i32,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub status: HostingStatus,
}

impl From<Hosting> for HostingResponse {
    fn from(value: Hosting) -> Self {
        let Hosting {
            id,
            employee_id,
            room_id,
            guest_first_name,
            guest_last_name,
            guests,
            applied_guest_count,
            start_date,
            end_date,
            notes,
            status,
        } = value;
        Self {
            id,
            employee_id,
            room_id,
            guest_first_name,
            guest_last_name,
            guests,
            applied_guest_count,
            start_date,
            end_date,
            notes,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostingsResponse {
    pub items: Vec<HostingResponse>,
}

impl From<Vec<Hosting>> for HostingsResponse {
    fn from(value: Vec<Hosting>) -> Self {
        Self {
            items: value.into_iter().map(HostingResponse::from).collect(),
        }
    }
}
