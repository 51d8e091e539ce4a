use leptos::*;
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::RequireRole,
    pages::{
        AdminReportsPage, LecturerEventsPage, LecturerProfilePage, LecturerStudentsPage,
        LoginPage,
    },
    state::session::SessionContext,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin/reports",
    "/lecturer/profile",
    "/lecturer/students",
    "/lecturer/events",
];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    let session = SessionContext::browser();
    provide_context(ApiClient::new(session.clone()));
    provide_context(session);
    view! {
        <Router>
            <Routes>
                <Route path="/" view=LoginPage/>
                <Route path="/login" view=LoginPage/>
                <Route path="/admin/reports" view=ProtectedAdminReports/>
                <Route path="/lecturer/profile" view=ProtectedLecturerProfile/>
                <Route path="/lecturer/students" view=ProtectedLecturerStudents/>
                <Route path="/lecturer/events" view=ProtectedLecturerEvents/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedAdminReports() -> impl IntoView {
    view! { <RequireRole role=Role::Admin><AdminReportsPage/></RequireRole> }
}

#[component]
fn ProtectedLecturerProfile() -> impl IntoView {
    view! { <RequireRole role=Role::Lecturer><LecturerProfilePage/></RequireRole> }
}

#[component]
fn ProtectedLecturerStudents() -> impl IntoView {
    view! { <RequireRole role=Role::Lecturer><LecturerStudentsPage/></RequireRole> }
}

#[component]
fn ProtectedLecturerEvents() -> impl IntoView {
    view! { <RequireRole role=Role::Lecturer><LecturerEventsPage/></RequireRole> }
}
