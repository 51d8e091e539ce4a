use crate::{
    api::Role,
    components::layout::ErrorMessage,
    state::session::SessionContext,
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Granted,
    SignedOut,
    WrongRole,
}

fn access_for(session: Option<&SessionContext>, role: Role) -> Access {
    let Some(session) = session.filter(|session| session.is_authenticated()) else {
        return Access::SignedOut;
    };
    // Without a snapshot the server decides; a 403 lands in the view's error path.
    match session.cached_profile() {
        Some(profile) if profile.role != role => Access::WrongRole,
        _ => Access::Granted,
    }
}

/// Renders `children` only for a signed-in user of `role`; signed-out visitors
/// are sent to the login route.
#[component]
pub fn RequireRole(role: Role, children: ChildrenFn) -> impl IntoView {
    let session = use_context::<SessionContext>();
    let access = access_for(session.as_ref(), role);
    if access == Access::SignedOut {
        if let Some(session) = session.as_ref() {
            session.expire();
        }
    }

    match access {
        Access::Granted => children().into_view(),
        Access::WrongRole => view! {
            <ErrorMessage message=format!("This page is only available to {} accounts.", role.as_str()) />
        }
        .into_view(),
        Access::SignedOut => ().into_view(),
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::session::{fixtures, LOGIN_ROUTE};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn signed_out_visitor_is_sent_to_login() {
        let test = fixtures::empty_session();
        let session = test.session.clone();
        let html = render_to_string(move || {
            provide_context(session);
            view! {
                <RequireRole role=Role::Lecturer>
                    {|| view! { <div>"lecturer-only"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("lecturer-only"));
        assert_eq!(test.navigator.history(), vec![LOGIN_ROUTE.to_string()]);
    }

    #[test]
    fn matching_role_renders_children() {
        let session = fixtures::signed_in(Role::Lecturer).session;
        let html = render_to_string(move || {
            provide_context(session);
            view! {
                <RequireRole role=Role::Lecturer>
                    {|| view! { <div>"lecturer-only"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("lecturer-only"));
    }
}
