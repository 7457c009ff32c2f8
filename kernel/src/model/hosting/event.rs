use chrono::{DateTime, Utc};
use derive_new::new;

use super::{Guest, HostingStatus};
use crate::model::id::{EmployeeId, HostingId};

#[derive(Debug, new)]
pub struct CreateHosting {
    pub employee_id: EmployeeId,
    pub guest_first_name: String,
    pub guest_last_name: String,
    pub guests: Vec<Guest>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[derive(Debug, new)]
pub struct UpdateHosting {
    pub hosting_id: HostingId,
    pub guest_first_name: Option<String>,
    pub guest_last_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub status: Option<HostingStatus>,
}
