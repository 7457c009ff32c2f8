use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::assignment::event::{CheckoutEmployee, CreateAssignment, ReassignEmployee};
use kernel::model::assignment::{Assignment, ReassignOutcome};
use kernel::model::id::{AssignmentId, RoomId};
use kernel::repository::assignment::AssignmentRepository;
use shared::error::{AppError, AppResult};
use sqlx::{Postgres, Transaction};

use crate::database::model::assignment::AssignmentRow;
use crate::database::ConnectionPool;
use crate::repository::occupancy::sync_room_status;

const ASSIGNMENT_COLUMNS: &str = r#"
    id, employee_id, room_id, check_in_date, expected_check_out_date, check_out_date
"#;

#[derive(new)]
pub struct AssignmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AssignmentRepository for AssignmentRepositoryImpl {
    async fn assign(&self, event: CreateAssignment) -> AppResult<Assignment> {
        let mut tx = self.db.begin().await?;

        // Preconditions checked inside the transaction; the occupancy
        // increment itself is conditional on remaining capacity, so two
        // racing requests cannot both fill the last place.
        {
            let employee: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE id = $1")
                .bind(event.employee_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            if employee < 1 {
                return Err(AppError::EntityNotFound("Employee not found".into()));
            }

            let room: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE id = $1")
                .bind(event.room_id)
                .fetch_one(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
            if room < 1 {
                return Err(AppError::EntityNotFound("Room not found".into()));
            }

            let active: i64 = sqlx::query_scalar(
                r#"
                    SELECT COUNT(*) FROM assignments
                    WHERE employee_id = $1 AND check_out_date IS NULL
                "#,
            )
            .bind(event.employee_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
            if active > 0 {
                return Err(AppError::UnprocessableEntity(
                    "Employee is already assigned to a room".into(),
                ));
            }
        }

        self.take_place(&mut tx, event.room_id).await?;

        let assignment = Assignment {
            id: AssignmentId::new(),
            employee_id: event.employee_id,
            room_id: event.room_id,
            check_in_date: event.check_in_date,
            expected_check_out_date: event.expected_check_out_date,
            check_out_date: None,
        };
        let res = sqlx::query(
            r#"
                INSERT INTO assignments
                (id, employee_id, room_id, check_in_date, expected_check_out_date)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(assignment.id)
        .bind(assignment.employee_id)
        .bind(assignment.room_id)
        .bind(assignment.check_in_date)
        .bind(assignment.expected_check_out_date)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No assignment record has been created".into(),
            ));
        }

        sync_room_status(&mut tx, event.room_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            employee_id = %assignment.employee_id,
            room_id = %assignment.room_id,
            "Assigned employee to room"
        );
        Ok(assignment)
    }

    async fn reassign(&self, event: ReassignEmployee) -> AppResult<ReassignOutcome> {
        let mut tx = self.db.begin().await?;

        let old_assignment = find_active(&mut tx, event.assignment_id).await?;

        let new_room: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE id = $1")
            .bind(event.new_room_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if new_room < 1 {
            return Err(AppError::EntityNotFound("New room not found".into()));
        }

        self.take_place_in_new_room(&mut tx, event.new_room_id)
            .await?;

        let res = sqlx::query("UPDATE assignments SET room_id = $2 WHERE id = $1")
            .bind(old_assignment.id)
            .bind(event.new_room_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No assignment record has been updated".into(),
            ));
        }

        sqlx::query(
            r#"
                UPDATE rooms
                SET current_occupancy = GREATEST(current_occupancy - 1, 0)
                WHERE id = $1
            "#,
        )
        .bind(old_assignment.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        // Both rooms get their status re-derived; the vacated one keeps an
        // independent maintenance or reservation state instead of being
        // forced back to AVAILABLE.
        sync_room_status(&mut tx, old_assignment.room_id).await?;
        sync_room_status(&mut tx, event.new_room_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            employee_id = %old_assignment.employee_id,
            old_room_id = %old_assignment.room_id,
            new_room_id = %event.new_room_id,
            "Reassigned employee"
        );

        let mut new_assignment = old_assignment.clone();
        new_assignment.room_id = event.new_room_id;
        Ok(ReassignOutcome {
            old_assignment,
            new_assignment,
        })
    }

    async fn checkout(&self, event: CheckoutEmployee) -> AppResult<Assignment> {
        let mut tx = self.db.begin().await?;

        let mut assignment = find_active(&mut tx, event.assignment_id).await?;
        let check_out_date = event.check_out_date.unwrap_or_else(Utc::now);

        let res = sqlx::query("UPDATE assignments SET check_out_date = $2 WHERE id = $1")
            .bind(assignment.id)
            .bind(check_out_date)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No assignment record has been updated".into(),
            ));
        }

        sqlx::query(
            r#"
                UPDATE rooms
                SET current_occupancy = GREATEST(current_occupancy - 1, 0)
                WHERE id = $1
            "#,
        )
        .bind(assignment.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        sync_room_status(&mut tx, assignment.room_id).await?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            employee_id = %assignment.employee_id,
            room_id = %assignment.room_id,
            "Checked out employee"
        );

        assignment.check_out_date = Some(check_out_date);
        Ok(assignment)
    }

    async fn find_all(&self) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, AssignmentRow>(&format!(
            "SELECT {ASSIGNMENT_COLUMNS} FROM assignments ORDER BY check_in_date DESC"
        ))
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Assignment::from).collect())
        .map_err(AppError::SpecificOperationError)
    }
}

impl AssignmentRepositoryImpl {
    // Conditional increment: claims one place only while capacity remains.
    async fn take_place(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE rooms
                SET current_occupancy = current_occupancy + 1
                WHERE id = $1 AND current_occupancy < capacity
            "#,
        )
        .bind(room_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::UnprocessableEntity(
                "Room is already at full capacity".into(),
            ));
        }
        Ok(())
    }

    async fn take_place_in_new_room(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
        self.take_place(tx, room_id).await.map_err(|e| match e {
            AppError::UnprocessableEntity(_) => {
                AppError::UnprocessableEntity("New room is at full capacity".into())
            }
            other => other,
        })
    }
}

async fn find_active(
    tx: &mut Transaction<'_, Postgres>,
    assignment_id: AssignmentId,
) -> AppResult<Assignment> {
    let row = sqlx::query_as::<_, AssignmentRow>(&format!(
        r#"
            SELECT {ASSIGNMENT_COLUMNS} FROM assignments
            WHERE id = $1 AND check_out_date IS NULL
        "#
    ))
    .bind(assignment_id)
    .fetch_optional(&mut **tx)
    .await
    .map_err(AppError::SpecificOperationError)?;

    row.map(Assignment::from)
        .ok_or_else(|| AppError::EntityNotFound("Active assignment not found".into()))
}
