//! Read-only report queries over users and their module results.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::report::{LecturerReportRow, StudentListQuery, StudentReportRow};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReportRepositoryTrait: Send + Sync {
    /// One row per student/module result; students without results appear once with empty columns.
    async fn students(
        &self,
        db: &PgPool,
        query: &StudentListQuery,
    ) -> Result<Vec<StudentReportRow>, AppError>;

    async fn lecturers(&self, db: &PgPool) -> Result<Vec<LecturerReportRow>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ReportRepository;

impl ReportRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportRepositoryTrait for ReportRepository {
    async fn students(
        &self,
        db: &PgPool,
        query: &StudentListQuery,
    ) -> Result<Vec<StudentReportRow>, AppError> {
        let (module, batch) = query.normalized();
        let rows = sqlx::query_as::<_, StudentReportRow>(
            "SELECT u.id AS student_id, \
                    TRIM(u.first_name || ' ' || u.last_name) AS student_name, \
                    u.first_name, u.last_name, u.email, \
                    r.batch AS batch_no, r.module, r.results \
             FROM users u \
             LEFT JOIN student_results r ON r.student_user_id = u.id \
             WHERE u.role = 'student' \
               AND ($1::text IS NULL OR r.module = $1) \
               AND ($2::text IS NULL OR r.batch = $2) \
             ORDER BY student_name, r.module NULLS LAST",
        )
        .bind(module)
        .bind(batch)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    async fn lecturers(&self, db: &PgPool) -> Result<Vec<LecturerReportRow>, AppError> {
        let rows = sqlx::query_as::<_, LecturerReportRow>(
            "SELECT u.id AS lecturer_id, \
                    TRIM(u.first_name || ' ' || u.last_name) AS lecturer_name, \
                    u.department, \
                    string_agg(m.module, ', ' ORDER BY m.module) AS module, \
                    u.email, u.contact_number \
             FROM users u \
             LEFT JOIN lecturer_modules m ON m.lecturer_user_id = u.id \
             WHERE u.role = 'lecturer' \
             GROUP BY u.id \
             ORDER BY lecturer_name",
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}
