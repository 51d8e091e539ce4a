use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LecturerStudentsPanel;

#[component]
pub fn LecturerStudentsPage() -> impl IntoView {
    view! { <LecturerStudentsPanel /> }
}
