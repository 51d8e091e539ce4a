use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::AppError;
use crate::models::submit_assignment::{NewSubmission, SubmissionQuery, SubmissionSummary};

/// Metadata columns; the payload itself is never selected.
const SUMMARY_COLUMNS: &str = "id, student_user_id, module, batch, submitted_at, \
     COALESCE(octet_length(submitted_assignment), 0)::BIGINT AS size_bytes";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepositoryTrait: Send + Sync {
    async fn create(
        &self,
        db: &PgPool,
        submission: &NewSubmission,
    ) -> Result<SubmissionSummary, AppError>;

    async fn list(
        &self,
        db: &PgPool,
        query: &SubmissionQuery,
    ) -> Result<Vec<SubmissionSummary>, AppError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionRepository;

impl SubmissionRepository {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SubmissionRepositoryTrait for SubmissionRepository {
    async fn create(
        &self,
        db: &PgPool,
        submission: &NewSubmission,
    ) -> Result<SubmissionSummary, AppError> {
        let query = format!(
            "INSERT INTO submit_assignment (student_user_id, submitted_assignment, module, batch, submitted_at) \
             VALUES ($1, $2, $3, $4, NOW()) \
             RETURNING {}",
            SUMMARY_COLUMNS
        );
        let row = sqlx::query_as::<_, SubmissionSummary>(&query)
            .bind(submission.student_user_id.as_deref())
            .bind(submission.submitted_assignment.as_deref())
            .bind(submission.module.as_deref())
            .bind(submission.batch.as_deref())
            .fetch_one(db)
            .await?;
        Ok(row)
    }

    async fn list(
        &self,
        db: &PgPool,
        query: &SubmissionQuery,
    ) -> Result<Vec<SubmissionSummary>, AppError> {
        let sql = format!(
            "SELECT {} FROM submit_assignment \
             WHERE ($1::text IS NULL OR module = $1) \
               AND ($2::text IS NULL OR batch = $2) \
             ORDER BY submitted_at DESC NULLS LAST, id DESC",
            SUMMARY_COLUMNS
        );
        let rows = sqlx::query_as::<_, SubmissionSummary>(&sql)
            .bind(query.module.as_deref())
            .bind(query.batch.as_deref())
            .fetch_all(db)
            .await?;
        Ok(rows)
    }
}
