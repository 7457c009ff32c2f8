use chrono::{DateTime, Utc};
use kernel::model::building::{Building, Floor};
use kernel::model::id::{BuildingId, FloorId};

#[derive(sqlx::FromRow)]
pub struct BuildingRow {
    pub id: BuildingId,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<BuildingRow> for Building {
    fn from(value: BuildingRow) -> Self {
        let BuildingRow {
            id,
            name,
            address,
            created_at,
        } = value;
        Building {
            id,
            name,
            address,
            created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
pub struct FloorRow {
    pub id: FloorId,
    pub building_id: BuildingId,
    pub floor_number: i32,
    pub created_at: DateTime<Utc>,
}

impl From<FloorRow> for Floor {
    fn from(value: FloorRow) -> Self {
        let FloorRow {
            id,
            building_id,
            floor_number,
            created_at,
        } = value;
        Floor {
            id,
            building_id,
            floor_number,
            created_at,
        }
    }
}
