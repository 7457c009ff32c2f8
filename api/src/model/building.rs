use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::building::event::{CreateBuilding, CreateFloor, UpdateBuilding, UpdateFloor};
use kernel::model::building::{Building, Floor};
use kernel::model::id::{BuildingId, FloorId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBuildingRequest {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(length(min = 1))]
    pub address: String,
}

impl From<CreateBuildingRequest> for CreateBuilding {
    fn from(value: CreateBuildingRequest) -> Self {
        let CreateBuildingRequest { name, address } = value;
        CreateBuilding { name, address }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBuildingRequest {
    #[garde(skip)]
    pub name: Option<String>,
    #[garde(skip)]
    pub address: Option<String>,
}

#[derive(new)]
pub struct UpdateBuildingRequestWithId(BuildingId, UpdateBuildingRequest);

impl From<UpdateBuildingRequestWithId> for UpdateBuilding {
    fn from(value: UpdateBuildingRequestWithId) -> Self {
        let UpdateBuildingRequestWithId(building_id, UpdateBuildingRequest { name, address }) =
            value;
        UpdateBuilding {
            building_id,
            name,
            address,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingResponse {
    pub id: BuildingId,
    pub name: String,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl From<Building> for BuildingResponse {
    fn from(value: Building) -> Self {
        let Building {
            id,
            name,
            address,
            created_at,
        } = value;
        Self {
            id,
            name,
            address,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingsResponse {
    pub items: Vec<BuildingResponse>,
}

impl From<Vec<Building>> for BuildingsResponse {
    fn from(value: Vec<Building>) -> Self {
        Self {
            items: value.into_iter().map(BuildingResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFloorRequest {
    #[garde(skip)]
    pub floor_number: i32,
}

#[derive(new)]
pub struct CreateFloorRequestWithId(BuildingId, CreateFloorRequest);

impl From<CreateFloorRequestWithId> for CreateFloor {
    fn from(value: CreateFloorRequestWithId) -> Self {
        let CreateFloorRequestWithId(building_id, CreateFloorRequest { floor_number }) = value;
        CreateFloor {
            building_id,
            floor_number,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFloorRequest {
    #[garde(skip)]
    pub floor_number: Option<i32>,
}

#[derive(new)]
pub struct UpdateFloorRequestWithId(FloorId, UpdateFloorRequest);

impl From<UpdateFloorRequestWithId> for UpdateFloor {
    fn from(value: UpdateFloorRequestWithId) -> Self {
        let UpdateFloorRequestWithId(floor_id, UpdateFloorRequest { floor_number }) = value;
        UpdateFloor {
            floor_id,
            floor_number,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorResponse {
    pub id: FloorId,
    pub building_id: BuildingId,
    pub floor_number: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Floor> for FloorResponse {
    fn from(value: Floor) -> Self {
        let Floor {
            id,
            building_id,
            floor_number,
            created_at,
        } = value;
        Self {
            id,
            building_id,
            floor_number,
            created_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorsResponse {
    pub items: Vec<FloorResponse>,
}

impl From<Vec<Floor>> for FloorsResponse {
    fn from(value: Vec<Floor>) -> Self {
        Self {
            items: value.into_iter().map(FloorResponse::from).collect(),
        }
    }
}
