use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::id::ReservationId;
use crate::model::reservation::event::CreateReservation;
use crate::model::reservation::Reservation;

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Books a room and re-derives its status in the same operation.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_all(&self) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    /// Removing the last reservation for a free room reverts it to
    /// available; occupied or maintenance rooms keep their status.
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()>;
}
