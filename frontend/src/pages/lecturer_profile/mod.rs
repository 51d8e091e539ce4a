use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LecturerProfilePanel;

#[component]
pub fn LecturerProfilePage() -> impl IntoView {
    view! { <LecturerProfilePanel /> }
}
