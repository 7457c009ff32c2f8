use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::building::event::{CreateBuilding, CreateFloor, UpdateBuilding, UpdateFloor};
use kernel::model::building::{Building, Floor};
use kernel::model::id::{BuildingId, FloorId};
use kernel::repository::building::{BuildingRepository, FloorRepository};
use shared::error::{AppError, AppResult};

use crate::database::model::building::{BuildingRow, FloorRow};
use crate::database::ConnectionPool;

#[derive(new)]
pub struct BuildingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BuildingRepository for BuildingRepositoryImpl {
    async fn create(&self, event: CreateBuilding) -> AppResult<Building> {
        let building = Building {
            id: BuildingId::new(),
            name: event.name,
            address: event.address,
            created_at: Utc::now(),
        };
        sqlx::query(
            r#"
                INSERT INTO buildings (id, name, address, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(building.id)
        .bind(&building.name)
        .bind(&building.address)
        .bind(building.created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(building_id = %building.id, "Created building");
        Ok(building)
    }

    async fn find_all(&self) -> AppResult<Vec<Building>> {
        sqlx::query_as::<_, BuildingRow>(
            "SELECT id, name, address, created_at FROM buildings ORDER BY created_at DESC",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Building::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, building_id: BuildingId) -> AppResult<Option<Building>> {
        sqlx::query_as::<_, BuildingRow>(
            "SELECT id, name, address, created_at FROM buildings WHERE id = $1",
        )
        .bind(building_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Building::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateBuilding) -> AppResult<Building> {
        let mut building = self
            .find_by_id(event.building_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Building not found".into()))?;
        if let Some(name) = event.name {
            building.name = name;
        }
        if let Some(address) = event.address {
            building.address = address;
        }

        let res = sqlx::query("UPDATE buildings SET name = $2, address = $3 WHERE id = $1")
            .bind(building.id)
            .bind(&building.name)
            .bind(&building.address)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No building record has been updated".into(),
            ));
        }

        tracing::info!(building_id = %building.id, "Updated building");
        Ok(building)
    }

    async fn delete(&self, building_id: BuildingId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM buildings WHERE id = $1")
            .bind(building_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if exists < 1 {
            return Err(AppError::EntityNotFound("Building not found".into()));
        }

        let rooms: i64 = sqlx::query_scalar(
            r#"
                SELECT COUNT(*) FROM rooms
                WHERE floor_id IN (SELECT id FROM floors WHERE building_id = $1)
            "#,
        )
        .bind(building_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if rooms > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete building with rooms. Please delete rooms first.".into(),
            ));
        }

        sqlx::query("DELETE FROM floors WHERE building_id = $1")
            .bind(building_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(building_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(%building_id, "Deleted building");
        Ok(())
    }
}

#[derive(new)]
pub struct FloorRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FloorRepository for FloorRepositoryImpl {
    async fn create(&self, event: CreateFloor) -> AppResult<Floor> {
        let building: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM buildings WHERE id = $1")
            .bind(event.building_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if building < 1 {
            return Err(AppError::EntityNotFound("Building not found".into()));
        }

        let floor = Floor {
            id: FloorId::new(),
            building_id: event.building_id,
            floor_number: event.floor_number,
            created_at: Utc::now(),
        };
        sqlx::query(
            r#"
                INSERT INTO floors (id, building_id, floor_number, created_at)
                VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(floor.id)
        .bind(floor.building_id)
        .bind(floor.floor_number)
        .bind(floor.created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(floor_id = %floor.id, building_id = %floor.building_id, "Created floor");
        Ok(floor)
    }

    async fn find_all(&self) -> AppResult<Vec<Floor>> {
        sqlx::query_as::<_, FloorRow>(
            "SELECT id, building_id, floor_number, created_at FROM floors ORDER BY floor_number",
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Floor::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_building(&self, building_id: BuildingId) -> AppResult<Vec<Floor>> {
        sqlx::query_as::<_, FloorRow>(
            r#"
                SELECT id, building_id, floor_number, created_at
                FROM floors
                WHERE building_id = $1
                ORDER BY floor_number
            "#,
        )
        .bind(building_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Floor::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, floor_id: FloorId) -> AppResult<Option<Floor>> {
        sqlx::query_as::<_, FloorRow>(
            "SELECT id, building_id, floor_number, created_at FROM floors WHERE id = $1",
        )
        .bind(floor_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Floor::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateFloor) -> AppResult<Floor> {
        let mut floor = self
            .find_by_id(event.floor_id)
            .await?
            .ok_or_else(|| AppError::EntityNotFound("Floor not found".into()))?;
        if let Some(floor_number) = event.floor_number {
            floor.floor_number = floor_number;
        }

        let res = sqlx::query("UPDATE floors SET floor_number = $2 WHERE id = $1")
            .bind(floor.id)
            .bind(floor.floor_number)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No floor record has been updated".into(),
            ));
        }

        tracing::info!(floor_id = %floor.id, "Updated floor");
        Ok(floor)
    }

    async fn delete(&self, floor_id: FloorId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM floors WHERE id = $1")
            .bind(floor_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if exists < 1 {
            return Err(AppError::EntityNotFound("Floor not found".into()));
        }

        let rooms: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE floor_id = $1")
            .bind(floor_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if rooms > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete floor with rooms.".into(),
            ));
        }

        sqlx::query("DELETE FROM floors WHERE id = $1")
            .bind(floor_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(%floor_id, "Deleted floor");
        Ok(())
    }
}
