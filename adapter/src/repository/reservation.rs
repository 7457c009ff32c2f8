use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::ReservationId;
use kernel::model::reservation::event::CreateReservation;
use kernel::model::reservation::Reservation;
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;

use crate::database::model::reservation::ReservationRow;
use crate::database::ConnectionPool;
use crate::repository::occupancy::sync_room_status;

const RESERVATION_COLUMNS: &str = r#"
    id, room_id, first_name, last_name, guest_id_card_number, guest_phone,
    job_title, department, guests, check_in_date, check_out_date, notes, created_at
"#;

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut tx = self.db.begin().await?;

        let room: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE id = $1")
            .bind(event.room_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if room < 1 {
            return Err(AppError::EntityNotFound("Room not found".into()));
        }

        let reservation = Reservation {
            id: ReservationId::new(),
            room_id: event.room_id,
            first_name: event.first_name,
            last_name: event.last_name,
            guest_id_card_number: event.guest_id_card_number,
            guest_phone: event.guest_phone,
            job_title: event.job_title,
            department: event.department,
            guests: event.guests,
            check_in_date: event.check_in_date,
            check_out_date: event.check_out_date,
            notes: event.notes,
            created_at: Utc::now(),
        };
        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (id, room_id, first_name, last_name, guest_id_card_number, guest_phone,
                 job_title, department, guests, check_in_date, check_out_date, notes, created_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(reservation.id)
        .bind(reservation.room_id)
        .bind(&reservation.first_name)
        .bind(&reservation.last_name)
        .bind(&reservation.guest_id_card_number)
        .bind(&reservation.guest_phone)
        .bind(&reservation.job_title)
        .bind(&reservation.department)
        .bind(Json(&reservation.guests))
        .bind(reservation.check_in_date)
        .bind(reservation.check_out_date)
        .bind(&reservation.notes)
        .bind(reservation.created_at)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        // An occupied or maintenance room keeps its status; only a free
        // room flips to RESERVED.
        sync_room_status(&mut tx, reservation.room_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            "Created reservation"
        );
        Ok(reservation)
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations ORDER BY created_at DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Reservation::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
        ))
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Reservation::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, ReservationRow>(&format!(
            "SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1"
        ))
        .bind(reservation_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(row) = row else {
            return Err(AppError::EntityNotFound("Reservation not found".into()));
        };
        let room_id = row.room_id;

        sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(reservation_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        sync_room_status(&mut tx, room_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(%reservation_id, %room_id, "Deleted reservation");
        Ok(())
    }
}
