use crate::{
    api::{ApiClient, ApiError, LecturerReportRow, Profile, Role, StudentReportRow},
    pages::shared::profile_or_cached,
};

pub async fn load_admin_profile(api: &ApiClient) -> Result<Profile, ApiError> {
    profile_or_cached(api.get_admin_profile().await, api.session(), Role::Admin)
}

pub async fn fetch_student_reports(api: &ApiClient) -> Result<Vec<StudentReportRow>, ApiError> {
    api.get_student_reports().await
}

pub async fn fetch_lecturer_reports(api: &ApiClient) -> Result<Vec<LecturerReportRow>, ApiError> {
    api.get_lecturer_reports().await
}
