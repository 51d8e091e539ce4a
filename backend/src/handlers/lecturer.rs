use axum::{
    extract::{Multipart, Query, State},
    Extension, Json,
};
use chrono::Utc;
use validator::Validate;

use super::form;
use crate::{
    error::AppError,
    models::{
        report::{StudentListQuery, StudentReportRow},
        user::{ProfileResponse, ProfileUpdate, User},
    },
    state::AppState,
    utils::upload::{remove_profile_image, store_profile_image},
};

struct PendingImage {
    file_name: String,
    bytes: Vec<u8>,
}

/// `PUT /api/lecturer/profile/update`: multipart text parts plus an optional `profileImage` file.
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(mut user): Extension<User>,
    mut multipart: Multipart,
) -> Result<Json<ProfileResponse>, AppError> {
    let mut update = ProfileUpdate::default();
    let mut image: Option<PendingImage> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "profileImage" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked.
                if !bytes.is_empty() {
                    image = Some(PendingImage {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "firstName" => update.first_name = Some(form::text(field).await?),
            "lastName" => update.last_name = Some(form::text(field).await?),
            "dateOfBirth" => {
                let value = form::text(field).await?;
                update.date_of_birth = form::optional_date("dateOfBirth", &value)?;
            }
            "gender" => update.gender = Some(form::text(field).await?),
            "address" => update.address = Some(form::text(field).await?),
            "contactNumber" => update.contact_number = Some(form::text(field).await?),
            other => {
                tracing::debug!(field = other, "Ignoring unknown profile field");
                let _ = field.bytes().await?;
            }
        }
    }

    update.validate()?;

    let mut stored_image = None;
    if let Some(image) = image {
        let path = store_profile_image(
            &state.config.upload_dir,
            &image.file_name,
            &image.bytes,
            state.config.upload_max_bytes,
        )
        .await?;
        update.profile_image = Some(path.clone());
        stored_image = Some(path);
    }

    update.apply_to(&mut user);
    user.updated_at = Utc::now();
    let saved = match state.users.update_profile(&state.pool, &user).await {
        Ok(saved) => saved,
        Err(err) => {
            if let Some(path) = stored_image {
                remove_profile_image(&state.config.upload_dir, &path).await;
            }
            return Err(err);
        }
    };
    tracing::info!(user_id = %saved.id, "Lecturer profile updated");

    Ok(Json(ProfileResponse::from(&saved)))
}

pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<StudentListQuery>,
) -> Result<Json<Vec<StudentReportRow>>, AppError> {
    let rows = state.reports.students(&state.pool, &query).await?;
    Ok(Json(rows))
}
