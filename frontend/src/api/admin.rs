use super::{
    client::ApiClient,
    types::{ApiError, LecturerReportRow, Profile, StudentReportRow},
};

impl ApiClient {
    pub async fn get_admin_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/admin/profile").await
    }

    pub async fn get_student_reports(&self) -> Result<Vec<StudentReportRow>, ApiError> {
        self.get_json("/admin/reports/students").await
    }

    pub async fn get_lecturer_reports(&self) -> Result<Vec<LecturerReportRow>, ApiError> {
        self.get_json("/admin/reports/lecturers").await
    }
}
