use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// One row of the `attendance` table: a student's mark for a single class session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i32,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(try_from = "String")]
    pub attendance: AttendanceStatus,
    pub classroom: String,
    pub module: String,
    pub batch: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }
}

impl TryFrom<String> for AttendanceStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            "Late" => Ok(AttendanceStatus::Late),
            other => Err(format!("unknown attendance value: {}", other)),
        }
    }
}

/// Payload for a single attendance mark. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    #[validate(length(min = 1))]
    pub student_id: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub attendance: AttendanceStatus,
    #[validate(length(min = 1))]
    pub classroom: String,
    #[validate(length(min = 1))]
    pub module: String,
    #[validate(length(min = 1))]
    pub batch: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordAttendanceRequest {
    #[validate(length(min = 1), nested)]
    pub records: Vec<NewAttendance>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AttendanceQuery {
    pub module: Option<String>,
    pub batch: Option<String>,
    pub date: Option<NaiveDate>,
}
