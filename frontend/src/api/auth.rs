use super::{
    client::{read_json, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// Exchange credentials for a token and start the session with it.
    /// A rejected login is reported as-is and does not touch the current session.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self
            .http_client()
            .post(self.url("/auth/login"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let login: LoginResponse = read_json(response).await?;

        self.session()
            .start(&login.token, login.expires_at, &login.user)
            .map_err(ApiError::Request)?;
        log::info!("signed in as {}", login.user.role.as_str());
        Ok(login)
    }

    pub fn logout(&self) {
        self.session().expire();
    }
}
