use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::{
        attendance::{AttendanceQuery, AttendanceRecord, NewAttendance, RecordAttendanceRequest},
        user::User,
    },
    state::AppState,
};

/// Accepts a JSON array of marks; the whole batch is stored or none of it is.
pub async fn record_attendance(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(records): Json<Vec<NewAttendance>>,
) -> Result<(StatusCode, Json<Vec<AttendanceRecord>>), AppError> {
    let request = RecordAttendanceRequest { records };
    request.validate()?;

    let stored = state
        .attendance
        .create_many(&state.pool, &request.records)
        .await?;
    tracing::info!(
        lecturer_id = %user.id,
        count = stored.len(),
        "Attendance recorded"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

pub async fn list_attendance(
    State(state): State<AppState>,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<Vec<AttendanceRecord>>, AppError> {
    let rows = state.attendance.list(&state.pool, &query).await?;
    Ok(Json(rows))
}
