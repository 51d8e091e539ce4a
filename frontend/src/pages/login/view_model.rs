use leptos::*;

use super::{repository, utils};
use crate::api::{ApiClient, ApiError, LoginRequest, LoginResponse};

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<LoginResponse, ApiError>>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        if let Err(msg) = utils::validate_credentials(&email, &password) {
            self.error.set(Some(msg));
            return;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>();
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let login_action = create_action({
        let api = api.clone();
        move |request: &LoginRequest| {
            let (api, request) = (api.clone(), request.clone());
            async move {
                let Some(api) = api else {
                    return Err(ApiError::Request("client unavailable".into()));
                };
                repository::login(&api, request).await
            }
        }
    });

    create_effect(move |_| {
        let Some(result) = login_action.value().get() else {
            return;
        };
        match result {
            Ok(response) => {
                error.set(None);
                password.set(String::new());
                if let Some(api) = api.as_ref() {
                    api.session().navigate(utils::landing_route(response.user.role));
                }
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}
