use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::AdminReportsPanel;

#[component]
pub fn AdminReportsPage() -> impl IntoView {
    view! { <AdminReportsPanel /> }
}
