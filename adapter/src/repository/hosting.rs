use async_trait::async_trait;
use derive_new::new;
use kernel::model::hosting::event::{CreateHosting, UpdateHosting};
use kernel::model::hosting::{Hosting, HostingStatus};
use kernel::model::id::{EmployeeId, HostingId, RoomId};
use kernel::repository::hosting::HostingRepository;
use shared::error::{AppError, AppResult};
use sqlx::types::Json;
use sqlx::{Postgres, Transaction};

use crate::database::model::hosting::HostingRow;
use crate::database::ConnectionPool;

const HOSTING_COLUMNS: &str = r#"
    id, employee_id, room_id, guest_first_name, guest_last_name,
    guests, applied_guest_count, start_date, end_date, notes, status
"#;

#[derive(new)]
pub struct HostingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HostingRepository for HostingRepositoryImpl {
    async fn create(&self, event: CreateHosting) -> AppResult<Hosting> {
        let mut tx = self.db.begin().await?;

        let employee: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = $1")
            .bind(event.employee_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if employee < 1 {
            return Err(AppError::EntityNotFound("Employee not found".into()));
        }

        let room_id = host_room(&mut tx, event.employee_id).await?;
        let guest_count = event.guests.len() as i32;

        // Guests join the host room's occupancy without a capacity check
        // and without touching the room status; occupancy may exceed
        // capacity on this path.
        let applied_guest_count = match room_id {
            Some(room_id) if guest_count > 0 => {
                sqlx::query(
                    "UPDATE rooms SET current_occupancy = current_occupancy + $2 WHERE id = $1",
                )
                .bind(room_id)
                .bind(guest_count)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
                guest_count
            }
            _ => 0,
        };

        let hosting = Hosting {
            id: HostingId::new(),
            employee_id: event.employee_id,
            room_id,
            guest_first_name: event.guest_first_name,
            guest_last_name: event.guest_last_name,
            guests: event.guests,
            applied_guest_count,
            start_date: event.start_date,
            end_date: event.end_date,
            notes: event.notes,
            status: HostingStatus::Active,
        };
        let res = sqlx::query(
            r#"
                INSERT INTO hostings
                (id, employee_id, room_id, guest_first_name, guest_last_name,
                 guests, applied_guest_count, start_date, end_date, notes, status)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(hosting.id)
        .bind(hosting.employee_id)
        .bind(hosting.room_id)
        .bind(&hosting.guest_first_name)
        .bind(&hosting.guest_last_name)
        .bind(Json(&hosting.guests))
        .bind(hosting.applied_guest_count)
        .bind(hosting.start_date)
        .bind(hosting.end_date)
        .bind(&hosting.notes)
        .bind(hosting.status)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No hosting record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            hosting_id = %hosting.id,
            employee_id = %hosting.employee_id,
            guest_count,
            "Created hosting"
        );
        Ok(hosting)
    }

    async fn find_all(&self) -> AppResult<Vec<Hosting>> {
        sqlx::query_as::<_, HostingRow>(&format!(
            "SELECT {HOSTING_COLUMNS} FROM hostings ORDER BY start_date DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hosting::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, hosting_id: HostingId) -> AppResult<Option<Hosting>> {
        sqlx::query_as::<_, HostingRow>(&format!(
            "SELECT {HOSTING_COLUMNS} FROM hostings WHERE id = $1"
        ))
        .bind(hosting_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Hosting::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateHosting) -> AppResult<Hosting> {
        let mut tx = self.db.begin().await?;

        let row = sqlx::query_as::<_, HostingRow>(&format!(
            "SELECT {HOSTING_COLUMNS} FROM hostings WHERE id = $1"
        ))
        .bind(event.hosting_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let mut hosting: Hosting = row
            .map(Hosting::from)
            .ok_or_else(|| AppError::EntityNotFound("Hosting not found".into()))?;

        let completing =
            event.status == Some(HostingStatus::Completed) && hosting.status != HostingStatus::Completed;

        if let Some(guest_first_name) = event.guest_first_name {
            hosting.guest_first_name = guest_first_name;
        }
        if let Some(guest_last_name) = event.guest_last_name {
            hosting.guest_last_name = guest_last_name;
        }
        if let Some(start_date) = event.start_date {
            hosting.start_date = start_date;
        }
        if let Some(end_date) = event.end_date {
            hosting.end_date = end_date;
        }
        if event.notes.is_some() {
            hosting.notes = event.notes;
        }
        if let Some(status) = event.status {
            hosting.status = status;
        }

        // First completion gives the applied guest count back to the host
        // room; repeating the transition adjusts nothing.
        if completing && hosting.applied_guest_count > 0 {
            if let Some(room_id) = hosting.room_id {
                sqlx::query(
                    r#"
                        UPDATE rooms
                        SET current_occupancy = GREATEST(current_occupancy - $2, 0)
                        WHERE id = $1
                    "#,
                )
                .bind(room_id)
                .bind(hosting.applied_guest_count)
                .execute(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            }
            hosting.applied_guest_count = 0;
        }

        let res = sqlx::query(
            r#"
                UPDATE hostings
                SET guest_first_name = $2, guest_last_name = $3, start_date = $4,
                    end_date = $5, notes = $6, status = $7, applied_guest_count = $8
                WHERE id = $1
            "#,
        )
        .bind(hosting.id)
        .bind(&hosting.guest_first_name)
        .bind(&hosting.guest_last_name)
        .bind(hosting.start_date)
        .bind(hosting.end_date)
        .bind(&hosting.notes)
        .bind(hosting.status)
        .bind(hosting.applied_guest_count)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No hosting record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(hosting_id = %hosting.id, "Updated hosting");
        Ok(hosting)
    }

    async fn delete(&self, hosting_id: HostingId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM hostings WHERE id = $1")
            .bind(hosting_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Hosting not found".into()));
        }

        tracing::info!(%hosting_id, "Deleted hosting");
        Ok(())
    }
}

// The host room is wherever the employee's active assignment points.
async fn host_room(
    tx: &mut Transaction<'_, Postgres>,
    employee_id: EmployeeId,
) -> AppResult<Option<RoomId>> {
    sqlx::query_scalar::<_, RoomId>(
        r#"
            SELECT room_id FROM assignments
            WHERE employee_id = $1 AND check_out_date IS NULL
        "#,
    )
    .bind(employee_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)
}
