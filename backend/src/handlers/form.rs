use axum::extract::multipart::Field;
use chrono::NaiveDate;

use crate::error::AppError;

/// Text part, trimmed. Parts are read fully even when unused so the stream can advance.
pub(crate) async fn text(field: Field<'_>) -> Result<String, AppError> {
    Ok(field.text().await?.trim().to_string())
}

/// Optional `YYYY-MM-DD` date; blank means "not provided".
pub(crate) fn optional_date(name: &str, value: &str) -> Result<Option<NaiveDate>, AppError> {
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be a YYYY-MM-DD date", name)))
}

pub(crate) fn non_blank(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
