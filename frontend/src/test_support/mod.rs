#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::{
        api::{ApiClient, Role},
        state::session::fixtures::{signed_in, TestSession},
    };
    use leptos::*;

    /// Nothing listens here, so any fetch that does run fails fast.
    pub const UNREACHABLE_API: &str = "http://127.0.0.1:9/api";

    /// Provide a signed-in session and a client bound to it.
    pub fn provide_signed_in(role: Role) -> TestSession {
        let test = signed_in(role);
        provide_context(test.session.clone());
        provide_context(ApiClient::new_with_base_url(
            UNREACHABLE_API,
            test.session.clone(),
        ));
        test
    }
}
