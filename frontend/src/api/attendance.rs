use super::{
    client::{read_json, ApiClient},
    types::{ApiError, AttendanceMark, AttendanceRecord},
};

impl ApiClient {
    /// Post one mark per student in a single request.
    pub async fn record_attendance(
        &self,
        marks: &[AttendanceMark],
    ) -> Result<Vec<AttendanceRecord>, ApiError> {
        let request = self
            .http_client()
            .post(self.url("/attendance"))
            .json(marks);
        let response = self.send_authorized(request).await?;
        read_json(response).await
    }
}
