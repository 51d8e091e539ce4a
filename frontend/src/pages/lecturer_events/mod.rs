use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::EventsPanel;

#[component]
pub fn LecturerEventsPage() -> impl IntoView {
    view! { <EventsPanel /> }
}
