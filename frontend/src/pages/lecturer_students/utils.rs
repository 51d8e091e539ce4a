use std::collections::HashMap;

use chrono::NaiveDate;

use crate::api::{AttendanceMark, AttendanceStatus, StudentRow};

pub const MODULE_OPTIONS: &[&str] = &[
    "Networking",
    "Databases",
    "Software Engineering",
    "Web Development",
];

pub const BATCH_OPTIONS: &[&str] = &["COM12", "COM13", "COM14"];

/// Module and batch the student list is filtered by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFilter {
    pub module: String,
    pub batch: String,
}

impl Default for StudentFilter {
    fn default() -> Self {
        Self {
            module: MODULE_OPTIONS[0].to_string(),
            batch: BATCH_OPTIONS[0].to_string(),
        }
    }
}

/// Per-student marks for one class session. Unmarked students count as present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceSheet {
    pub classroom: String,
    pub date: String,
    pub marks: HashMap<String, AttendanceStatus>,
}

impl AttendanceSheet {
    pub fn mark(&mut self, student_id: &str, status: AttendanceStatus) {
        self.marks.insert(student_id.to_string(), status);
    }

    pub fn status_of(&self, student_id: &str) -> AttendanceStatus {
        self.marks.get(student_id).copied().unwrap_or_default()
    }

    /// One mark per listed student, or the reason the sheet cannot be posted.
    pub fn build_marks(
        &self,
        students: &[StudentRow],
        filter: &StudentFilter,
    ) -> Result<Vec<AttendanceMark>, String> {
        let classroom = self.classroom.trim();
        if classroom.is_empty() {
            return Err("Enter the classroom.".into());
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| "Pick the class date.".to_string())?;
        if students.is_empty() {
            return Err("There are no students to mark.".into());
        }

        students
            .iter()
            .map(|student| {
                let student_id = student
                    .student_id
                    .clone()
                    .filter(|id| !id.trim().is_empty())
                    .ok_or_else(|| format!("{} has no student id.", student.student_name))?;
                let (first_name, last_name) = split_name(student)
                    .ok_or_else(|| format!("Student {} has no name.", student_id))?;
                Ok(AttendanceMark {
                    attendance: self.status_of(&student_id),
                    student_id,
                    first_name,
                    last_name,
                    classroom: classroom.to_string(),
                    module: filter.module.clone(),
                    batch: filter.batch.clone(),
                    date,
                })
            })
            .collect()
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// First and last name for a mark. A single-word name fills both.
fn split_name(student: &StudentRow) -> Option<(String, String)> {
    let name = student.student_name.trim();
    let (name_first, name_last) = name
        .split_once(' ')
        .map(|(first, last)| (first, last.trim()))
        .unwrap_or((name, ""));

    let first = non_blank(&student.first_name).unwrap_or_else(|| name_first.to_string());
    if first.is_empty() {
        return None;
    }
    let last = non_blank(&student.last_name)
        .or_else(|| Some(name_last.to_string()).filter(|last| !last.is_empty()))
        .unwrap_or_else(|| first.clone());
    Some((first, last))
}
