use kernel::model::id::RoomId;
use kernel::model::room::{derive_status, RoomStatus};
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, Transaction};

/// Recomputes and stores a room's status from its source-of-truth counts,
/// inside the caller's transaction. Shared by every ledger operation that
/// may change a room's occupancy or reservation set.
pub(crate) async fn sync_room_status(
    tx: &mut Transaction<'_, Postgres>,
    room_id: RoomId,
) -> AppResult<RoomStatus> {
    let (current_occupancy, capacity, under_maintenance): (i32, i32, bool) = sqlx::query_as(
        r#"
            SELECT current_occupancy, capacity, under_maintenance
            FROM rooms
            WHERE id = $1
        "#,
    )
    .bind(room_id)
    .fetch_one(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)?;

    let active_reservations: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM reservations WHERE room_id = $1")
            .bind(room_id)
            .fetch_one(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

    let status = derive_status(
        current_occupancy,
        capacity,
        active_reservations,
        under_maintenance,
    );

    sqlx::query("UPDATE rooms SET status = $2 WHERE id = $1")
        .bind(room_id)
        .bind(status)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

    Ok(status)
}
