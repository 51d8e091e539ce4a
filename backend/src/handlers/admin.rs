use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppError,
    models::report::{LecturerReportRow, StudentListQuery, StudentReportRow},
    state::AppState,
};

pub async fn student_reports(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<Vec<StudentReportRow>>, AppError> {
    let rows = state.reports.students(&state.pool, &query).await?;
    Ok(Json(rows))
}

pub async fn lecturer_reports(
    State(state): State<AppState>,
) -> Result<Json<Vec<LecturerReportRow>>, AppError> {
    let rows = state.reports.lecturers(&state.pool).await?;
    Ok(Json(rows))
}
