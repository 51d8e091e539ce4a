use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub student_user_id: Option<String>,
    pub submitted_assignment: Option<Vec<u8>>,
    pub module: Option<String>,
    pub batch: Option<String>,
}

/// Metadata of one `submit_assignment` row. The payload stays in the database;
/// only its size is read back. Every column except `id` is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSummary {
    pub id: i32,
    pub student_user_id: Option<String>,
    pub module: Option<String>,
    pub batch: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub size_bytes: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct SubmissionQuery {
    pub module: Option<String>,
    pub batch: Option<String>,
}
