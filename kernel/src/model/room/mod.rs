pub mod event;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::id::{FloorId, RoomId};

#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub floor_id: FloorId,
    pub room_number: String,
    pub capacity: i32,
    pub current_occupancy: i32,
    pub under_maintenance: bool,
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "room_status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Available,
    Occupied,
    Reserved,
    Maintenance,
}

/// Computes a room's status from its source-of-truth counts.
///
/// Every occupancy mutation recomputes the status through this function
/// instead of overwriting it at the call site, so vacating a room cannot
/// clobber an unrelated maintenance or reservation state. Precedence:
/// maintenance wins over everything, a full room is occupied regardless of
/// reservations, and a pending reservation marks an otherwise free room.
///
/// Guest-hosting occupancy adjustments intentionally do not call this:
/// guest counts never drive a status transition.
pub fn derive_status(
    current_occupancy: i32,
    capacity: i32,
    active_reservations: i64,
    under_maintenance: bool,
) -> RoomStatus {
    if under_maintenance {
        RoomStatus::Maintenance
    } else if current_occupancy >= capacity {
        RoomStatus::Occupied
    } else if active_reservations > 0 {
        RoomStatus::Reserved
    } else {
        RoomStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_room_is_available() {
        assert_eq!(derive_status(0, 2, 0, false), RoomStatus::Available);
    }

    #[test]
    fn partially_filled_room_stays_available() {
        assert_eq!(derive_status(1, 2, 0, false), RoomStatus::Available);
    }

    #[test]
    fn full_room_is_occupied() {
        assert_eq!(derive_status(1, 1, 0, false), RoomStatus::Occupied);
        assert_eq!(derive_status(2, 2, 0, false), RoomStatus::Occupied);
    }

    #[test]
    fn overshoot_counts_as_occupied() {
        // The guest-hosting path may push occupancy past capacity.
        assert_eq!(derive_status(3, 2, 0, false), RoomStatus::Occupied);
    }

    #[test]
    fn reservation_marks_a_free_room_reserved() {
        assert_eq!(derive_status(0, 2, 1, false), RoomStatus::Reserved);
        assert_eq!(derive_status(1, 2, 2, false), RoomStatus::Reserved);
    }

    #[test]
    fn full_room_with_reservation_stays_occupied() {
        assert_eq!(derive_status(2, 2, 1, false), RoomStatus::Occupied);
    }

    #[test]
    fn maintenance_wins_over_everything() {
        assert_eq!(derive_status(0, 2, 0, true), RoomStatus::Maintenance);
        assert_eq!(derive_status(2, 2, 3, true), RoomStatus::Maintenance);
    }
}
