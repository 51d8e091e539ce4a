use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reconcile::{Dated, Searchable};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("You are not signed in")]
    MissingCredential,
    #[error("Your session has expired")]
    Unauthorized,
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Unexpected response: {0}")]
    Shape(String),
    #[error("Network error: {0}")]
    Request(String),
    #[error("Request cancelled")]
    Cancelled,
}

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Lecturer,
    Student,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Lecturer => "lecturer",
            Role::Student => "student",
            Role::Unknown => "unknown",
        }
    }
}

/// Account profile as served by the profile endpoints and cached in the session.
/// Every field is optional so partial cache snapshots still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_birth: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub contact_number: Option<String>,
    pub department: Option<String>,
    pub profile_image: Option<String>,
}

impl Profile {
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        (!name.is_empty()).then_some(name)
    }

    /// Server values win; fields the server omitted keep the local value.
    pub fn merged_with(&self, server: Profile) -> Profile {
        fn pick(server: Option<String>, local: &Option<String>) -> Option<String> {
            server.or_else(|| local.clone())
        }
        Profile {
            id: pick(server.id, &self.id),
            email: pick(server.email, &self.email),
            role: if server.role == Role::Unknown {
                self.role
            } else {
                server.role
            },
            first_name: pick(server.first_name, &self.first_name),
            last_name: pick(server.last_name, &self.last_name),
            date_of_birth: pick(server.date_of_birth, &self.date_of_birth),
            gender: pick(server.gender, &self.gender),
            address: pick(server.address, &self.address),
            contact_number: pick(server.contact_number, &self.contact_number),
            department: pick(server.department, &self.department),
            profile_image: pick(server.profile_image, &self.profile_image),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentReportRow {
    pub student_id: Option<String>,
    pub student_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub batch_no: Option<String>,
    pub module: Option<String>,
    pub results: Option<String>,
}

impl Searchable for StudentReportRow {
    fn search_key(&self) -> &str {
        &self.student_name
    }
}

/// Rows of `GET /api/lecturer/students` share the report shape.
pub type StudentRow = StudentReportRow;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LecturerReportRow {
    pub lecturer_id: Option<String>,
    pub lecturer_name: String,
    pub department: Option<String>,
    pub module: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
}

impl Searchable for LecturerReportRow {
    fn search_key(&self) -> &str {
        &self.lecturer_name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventAnnouncement {
    pub id: Option<i64>,
    pub name: String,
    pub date: String,
    pub time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
}

impl Dated for EventAnnouncement {
    fn sort_date(&self) -> Option<NaiveDate> {
        let date = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
    }
}

impl Searchable for EventAnnouncement {
    fn search_key(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 3] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

/// One attendance mark as posted to `POST /api/attendance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub attendance: AttendanceStatus,
    pub classroom: String,
    pub module: String,
    pub batch: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub attendance: AttendanceStatus,
    pub classroom: String,
    pub module: String,
    pub batch: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub user: Profile,
}
