use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::RoomId;
use kernel::model::room::event::{CreateRoom, UpdateRoom};
use kernel::model::room::{Room, RoomStatus};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::model::room::RoomRow;
use crate::database::ConnectionPool;
use crate::repository::occupancy::sync_room_status;

const ROOM_COLUMNS: &str = r#"
    id, floor_id, room_number, capacity,
    current_occupancy, under_maintenance, status, created_at
"#;

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let floor: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM floors WHERE id = $1")
            .bind(event.floor_id)
            .fetch_one(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if floor < 1 {
            return Err(AppError::EntityNotFound("Floor not found".into()));
        }

        let room = Room {
            id: RoomId::new(),
            floor_id: event.floor_id,
            room_number: event.room_number,
            capacity: event.capacity,
            current_occupancy: 0,
            under_maintenance: false,
            status: RoomStatus::Available,
            created_at: Utc::now(),
        };
        sqlx::query(
            r#"
                INSERT INTO rooms
                (id, floor_id, room_number, capacity,
                 current_occupancy, under_maintenance, status, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(room.id)
        .bind(room.floor_id)
        .bind(&room.room_number)
        .bind(room.capacity)
        .bind(room.current_occupancy)
        .bind(room.under_maintenance)
        .bind(room.status)
        .bind(room.created_at)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        tracing::info!(room_id = %room.id, room_number = %room.room_number, "Created room");
        Ok(room)
    }

    async fn find_all(&self) -> AppResult<Vec<Room>> {
        sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY room_number"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Room::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        sqlx::query_as::<_, RoomRow>(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"))
            .bind(room_id)
            .fetch_optional(self.db.inner_ref())
            .await
            .map(|row| row.map(Room::from))
            .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms WHERE id = $1"
        ))
        .bind(event.room_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let mut room: Room = row
            .map(Room::from)
            .ok_or_else(|| AppError::EntityNotFound("Room not found".into()))?;

        if let Some(room_number) = event.room_number {
            room.room_number = room_number;
        }
        if let Some(capacity) = event.capacity {
            room.capacity = capacity;
        }
        if let Some(under_maintenance) = event.under_maintenance {
            room.under_maintenance = under_maintenance;
        }

        sqlx::query(
            r#"
                UPDATE rooms
                SET room_number = $2, capacity = $3, under_maintenance = $4
                WHERE id = $1
            "#,
        )
        .bind(room.id)
        .bind(&room.room_number)
        .bind(room.capacity)
        .bind(room.under_maintenance)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Capacity or maintenance changes can shift the derived status.
        room.status = sync_room_status(&mut tx, room.id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(room_id = %room.id, "Updated room");
        Ok(room)
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let row: Option<(i32,)> =
            sqlx::query_as("SELECT current_occupancy FROM rooms WHERE id = $1")
                .bind(room_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some((current_occupancy,)) = row else {
            return Err(AppError::EntityNotFound("Room not found".into()));
        };

        let assignments: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assignments WHERE room_id = $1")
                .bind(room_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if assignments > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete room with active or past assignments.".into(),
            ));
        }
        if current_occupancy > 0 {
            return Err(AppError::UnprocessableEntity(
                "Cannot delete an occupied room.".into(),
            ));
        }

        sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(room_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(%room_id, "Deleted room");
        Ok(())
    }
}
