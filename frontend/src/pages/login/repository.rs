use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};

pub async fn login(api: &ApiClient, request: LoginRequest) -> Result<LoginResponse, ApiError> {
    api.login(request).await
}
