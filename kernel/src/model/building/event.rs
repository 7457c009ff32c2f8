use derive_new::new;

use crate::model::id::{BuildingId, FloorId};

#[derive(Debug, new)]
pub struct CreateBuilding {
    pub name: String,
    pub address: String,
}

#[derive(Debug, new)]
pub struct UpdateBuilding {
    pub building_id: BuildingId,
    pub name: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, new)]
pub struct CreateFloor {
    pub building_id: BuildingId,
    pub floor_number: i32,
}

#[derive(Debug, new)]
pub struct UpdateFloor {
    pub floor_id: FloorId,
    pub floor_number: Option<i32>,
}
