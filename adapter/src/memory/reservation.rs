use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::id::ReservationId;
use kernel::model::reservation::event::CreateReservation;
use kernel::model::reservation::Reservation;
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use super::InMemoryStore;

#[derive(new)]
pub struct InMemoryReservationRepository {
    store: InMemoryStore,
}

#[async_trait]
impl ReservationRepository for InMemoryReservationRepository {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let mut state = self.store.lock().await;

        if !state.rooms.contains_key(&event.room_id) {
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
        state
            .reservations
            .insert(reservation.id, reservation.clone());
        state.sync_room_status(event.room_id)?;

        tracing::info!(
            reservation_id = %reservation.id,
            room_id = %reservation.room_id,
            "Created reservation"
        );
        Ok(reservation)
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        let state = self.store.lock().await;
        let mut reservations: Vec<Reservation> = state.reservations.values().cloned().collect();
        reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(reservations)
    }

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let state = self.store.lock().await;
        Ok(state.reservations.get(&reservation_id).cloned())
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let mut state = self.store.lock().await;

        let reservation = state
            .reservations
            .remove(&reservation_id)
            .ok_or_else(|| AppError::EntityNotFound("Reservation not found".into()))?;
        state.sync_room_status(reservation.room_id)?;

        tracing::info!(%reservation_id, "Deleted reservation");
        Ok(())
    }
}
