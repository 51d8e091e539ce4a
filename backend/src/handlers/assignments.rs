use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::form;
use crate::{
    error::AppError,
    models::{
        submit_assignment::{NewSubmission, SubmissionQuery, SubmissionSummary},
        user::User,
    },
    state::AppState,
};

/// `POST /api/assignments/submit`: multipart `module`, `batch` and the `submittedAssignment` file.
pub async fn submit_assignment(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<SubmissionSummary>), AppError> {
    let mut submission = NewSubmission {
        student_user_id: Some(user.id.clone()),
        ..NewSubmission::default()
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "submittedAssignment" => {
                let bytes = field.bytes().await?;
                if bytes.len() > state.config.upload_max_bytes {
                    return Err(AppError::BadRequest(format!(
                        "submittedAssignment exceeds {} bytes",
                        state.config.upload_max_bytes
                    )));
                }
                submission.submitted_assignment = Some(bytes.to_vec()).filter(|b| !b.is_empty());
            }
            "module" => submission.module = form::non_blank(form::text(field).await?),
            "batch" => submission.batch = form::non_blank(form::text(field).await?),
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    let stored = state.submissions.create(&state.pool, &submission).await?;
    tracing::info!(
        submission_id = stored.id,
        student_id = %user.id,
        "Assignment submitted"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// Submission metadata only; payloads are never echoed back in listings.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(query): Query<SubmissionQuery>,
) -> Result<Json<Vec<SubmissionSummary>>, AppError> {
    let rows = state.submissions.list(&state.pool, &query).await?;
    Ok(Json(rows))
}
