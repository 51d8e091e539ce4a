//! Attendance repository.
//!
//! Rows are insert-only: there is no update or delete path.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::attendance::{AttendanceQuery, AttendanceRecord, NewAttendance};

const SELECT_COLUMNS: &str =
    "id, student_id, first_name, last_name, attendance, classroom, module, batch, date";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceRepositoryTrait: Send + Sync {
    /// Insert a batch of marks in one transaction.
    async fn create_many(
        &self,
        db: &PgPool,
        records: &[NewAttendance],
    ) -> Result<Vec<AttendanceRecord>, AppError>;

    /// List marks, newest session first, optionally narrowed by module/batch/date.
    async fn list(
        &self,
        db: &PgPool,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AttendanceRepository;

impl AttendanceRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AttendanceRepositoryTrait for AttendanceRepository {
    async fn create_many(
        &self,
        db: &PgPool,
        records: &[NewAttendance],
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let query = format!(
            "INSERT INTO attendance (student_id, first_name, last_name, attendance, classroom, module, batch, date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {}",
            SELECT_COLUMNS
        );

        let mut tx = db.begin().await?;
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let row = sqlx::query_as::<_, AttendanceRecord>(&query)
                .bind(&record.student_id)
                .bind(&record.first_name)
                .bind(&record.last_name)
                .bind(record.attendance.as_str())
                .bind(&record.classroom)
                .bind(&record.module)
                .bind(&record.batch)
                .bind(record.date)
                .fetch_one(&mut *tx)
                .await?;
            created.push(row);
        }
        tx.commit().await?;
        Ok(created)
    }

    async fn list(
        &self,
        db: &PgPool,
        query: &AttendanceQuery,
    ) -> Result<Vec<AttendanceRecord>, AppError> {
        let sql = format!(
            "SELECT {} FROM attendance \
             WHERE ($1::text IS NULL OR module = $1) \
               AND ($2::text IS NULL OR batch = $2) \
               AND ($3::date IS NULL OR date = $3) \
             ORDER BY date DESC, last_name, first_name",
            SELECT_COLUMNS
        );
        let rows = sqlx::query_as::<_, AttendanceRecord>(&sql)
            .bind(query.module.as_deref())
            .bind(query.batch.as_deref())
            .bind(query.date)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }
}
