use axum::{Extension, Json};

use crate::models::user::{ProfileResponse, User};

/// Profile of the authenticated account. Mounted behind the admin and lecturer guards.
pub async fn get_profile(Extension(user): Extension<User>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&user))
}
