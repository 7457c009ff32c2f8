pub mod event;

use chrono::{DateTime, Utc};

use crate::model::id::{BuildingId, FloorId};

#[derive(Debug, Clone)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Floor {
    pub id: FloorId,
    pub building_id: BuildingId,
    pub floor_number: i32,
    pub created_at: DateTime<Utc>,
}
