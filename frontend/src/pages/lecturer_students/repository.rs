use crate::api::{ApiClient, ApiError, AttendanceMark, AttendanceRecord, StudentRow};

use super::utils::StudentFilter;

pub async fn fetch_students(
    api: &ApiClient,
    filter: &StudentFilter,
) -> Result<Vec<StudentRow>, ApiError> {
    api.get_lecturer_students(&filter.module, &filter.batch).await
}

pub async fn submit_attendance(
    api: &ApiClient,
    marks: Vec<AttendanceMark>,
) -> Result<Vec<AttendanceRecord>, ApiError> {
    api.record_attendance(&marks).await
}
