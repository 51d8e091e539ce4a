use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
    state::session::SessionContext,
};

/// Header older deployments read the token from; sent alongside `Authorization`.
pub const LEGACY_TOKEN_HEADER: &str = "x-auth-token";

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionContext,
}

impl ApiClient {
    pub fn new(session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: SessionContext) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) fn url(&self, path: &str) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url(),
        };
        format!("{}{}", base.trim_end_matches('/'), path)
    }

    /// Attach the bearer token (and its legacy twin) and send. Fails before
    /// touching the network when there is no usable credential.
    pub(super) async fn send_authorized(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let token = self.session.credential()?;
        let response = request
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .header(LEGACY_TOKEN_HEADER, token)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if response.status() == StatusCode::UNAUTHORIZED {
            log::warn!("session rejected by {}; signing out", response.url().path());
            self.session.expire();
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }

    pub(super) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .send_authorized(self.client.get(self.url(path)))
            .await?;
        read_json(response).await
    }
}

/// Decode a success body into `T`, or map the failure status to [`ApiError::Http`].
pub(super) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::Http {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Shape(e.to_string()))
}

fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.error.or(body.message))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}
