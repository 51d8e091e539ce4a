use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{LoginRequest, LoginResponse, ProfileResponse},
    state::AppState,
    utils::{
        jwt::{create_access_token, Claims},
        password::{verify_against_dummy, verify_password},
    },
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub async fn login(
    State(state): State<AppState>,
    Json(mut payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.email = payload.email.trim().to_owned();
    payload.validate()?;

    let Some(user) = state
        .users
        .find_by_email(&state.pool, &payload.email)
        .await?
    else {
        verify_against_dummy(&payload.password);
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    };

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login rejected: password mismatch");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let claims = Claims::new(
        user.id.clone(),
        user.email.clone(),
        user.role,
        state.config.jwt_expiration_hours,
    );
    let token = create_access_token(&claims, &state.config.jwt_secret)?;
    tracing::info!(user_id = %user.id, role = user.role.as_str(), "User logged in");

    Ok(Json(LoginResponse {
        token,
        expires_at: claims.expires_at(),
        user: ProfileResponse::from(&user),
    }))
}
