use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::{User, UserRole},
    state::AppState,
    utils::jwt::{verify_access_token, Claims},
};

/// Header older clients send alongside `Authorization`, carrying the same token.
pub const LEGACY_TOKEN_HEADER: &str = "x-auth-token";

pub async fn auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, None).await
}

pub async fn auth_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, Some(UserRole::Admin)).await
}

pub async fn auth_lecturer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, Some(UserRole::Lecturer)).await
}

pub async fn auth_student(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    authorize(&state, request, next, Some(UserRole::Student)).await
}

async fn authorize(
    state: &AppState,
    mut request: Request,
    next: Next,
    required: Option<UserRole>,
) -> Result<Response, AppError> {
    let (claims, user) = authenticate_request(request.headers(), state).await?;
    if let Some(role) = required {
        if user.role != role {
            tracing::debug!(user_id = %user.id, role = user.role.as_str(), required = role.as_str(), "Role check failed");
            return Err(AppError::Forbidden("Insufficient role".into()));
        }
    }

    request.extensions_mut().insert(claims);
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        let token = rest.trim();
        (!token.is_empty()).then_some(token)
    } else {
        None
    }
}

/// Token from `Authorization: Bearer`, falling back to the legacy header.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_bearer_token)
        .or_else(|| {
            headers
                .get(LEGACY_TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
        })
        .map(str::to_string)
}

async fn authenticate_request(
    headers: &HeaderMap,
    state: &AppState,
) -> Result<(Claims, User), AppError> {
    let token =
        extract_token(headers).ok_or_else(|| AppError::Unauthorized("Missing token".into()))?;

    let claims = verify_access_token(&token, &state.config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    let user = state
        .users
        .find_by_id(&state.pool, &claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Unknown user".into()))?;

    Ok((claims, user))
}
