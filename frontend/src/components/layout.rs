use crate::{
    api::Role,
    state::session::{SessionContext, LOGIN_ROUTE},
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let session = use_context::<SessionContext>();
    let role = session
        .as_ref()
        .and_then(SessionContext::cached_profile)
        .map(|profile| profile.role)
        .unwrap_or_default();
    let on_logout = move |_| {
        if let Some(session) = session.as_ref() {
            session.expire();
        }
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Campus Portal"</h1>
                    <nav class="flex space-x-4">
                        {nav_links(role)
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                        <button
                            on:click=on_logout
                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                        >
                            "Log out"
                        </button>
                    </nav>
                </div>
            </div>
        </header>
    }
}

pub fn nav_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Admin => &[("/admin/reports", "Reports")],
        Role::Lecturer => &[
            ("/lecturer/profile", "Profile"),
            ("/lecturer/students", "Students"),
            ("/lecturer/events", "Events"),
        ],
        Role::Student | Role::Unknown => &[(LOGIN_ROUTE, "Sign in")],
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="status" class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lecturers_get_their_three_pages() {
        let hrefs: Vec<_> = nav_links(Role::Lecturer).iter().map(|(href, _)| *href).collect();
        assert_eq!(
            hrefs,
            ["/lecturer/profile", "/lecturer/students", "/lecturer/events"]
        );
        assert_eq!(nav_links(Role::Admin).len(), 1);
    }
}
