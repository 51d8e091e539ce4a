use std::path::Path;

use uuid::Uuid;

use crate::error::AppError;

pub const UPLOAD_ROUTE: &str = "/uploads";

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Lower-cased extension of an uploaded image, if it is one we serve.
pub fn image_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Writes a profile image under `upload_dir` and returns the public path it is served from.
pub async fn store_profile_image(
    upload_dir: &str,
    file_name: &str,
    bytes: &[u8],
    max_bytes: usize,
) -> Result<String, AppError> {
    if bytes.is_empty() {
        return Err(AppError::BadRequest("profileImage is empty".into()));
    }
    if bytes.len() > max_bytes {
        return Err(AppError::BadRequest(format!(
            "profileImage exceeds {} bytes",
            max_bytes
        )));
    }
    let extension = image_extension(file_name)
        .ok_or_else(|| AppError::BadRequest("profileImage must be an image file".into()))?;

    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?;

    let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
    let target = Path::new(upload_dir).join(&stored_name);
    tokio::fs::write(&target, bytes)
        .await
        .map_err(|e| AppError::InternalServerError(e.into()))?;

    tracing::debug!(path = %target.display(), size = bytes.len(), "Stored profile image");
    Ok(format!("{}/{}", UPLOAD_ROUTE, stored_name))
}

/// Deletes an image stored by [`store_profile_image`]. Failures are only logged.
pub async fn remove_profile_image(upload_dir: &str, public_path: &str) {
    let Some(file_name) = Path::new(public_path).file_name() else {
        return;
    };
    let target = Path::new(upload_dir).join(file_name);
    if let Err(err) = tokio::fs::remove_file(&target).await {
        tracing::warn!(path = %target.display(), error = %err, "Could not remove profile image");
    }
}
