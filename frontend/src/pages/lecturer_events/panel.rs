use leptos::*;

use super::view_model::use_events_view_model;
use crate::{
    api::EventAnnouncement,
    components::{
        layout::Layout,
        table::{display_or_na, DataTable, TableRow, TableState},
    },
    reconcile::{ListState, SortOrder},
};

pub const EVENT_HEADERS: &[&str] = &["Event", "Date", "Time", "Venue", "Description"];

impl TableRow for EventAnnouncement {
    fn cells(&self) -> Vec<String> {
        vec![
            display_or_na(Some(&self.name)),
            display_or_na(Some(self.date.get(..10).unwrap_or(&self.date))),
            display_or_na(self.time.as_deref()),
            display_or_na(self.venue.as_deref().or(self.location.as_deref())),
            display_or_na(self.description.as_deref()),
        ]
    }
}

#[component]
pub fn EventsPanel() -> impl IntoView {
    let vm = use_events_view_model();

    view! {
        <Layout>
            <div class="space-y-4">
                <div class="flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-fg">"Events"</h2>
                    <SortSelect order=vm.order />
                </div>
                <EventTable events=vm.events />
            </div>
        </Layout>
    }
}

#[component]
pub fn SortSelect(order: RwSignal<SortOrder>) -> impl IntoView {
    let on_change = move |ev: ev::Event| match event_target_value(&ev).parse::<SortOrder>() {
        Ok(next) => order.set(next),
        Err(err) => log::warn!("{}", err),
    };

    view! {
        <select class="rounded-md border border-border px-3 py-2 text-sm" on:change=on_change>
            {SortOrder::ALL
                .iter()
                .map(|option| {
                    let option = *option;
                    view! {
                        <option value=option.as_str() selected=move || order.get() == option>
                            {option.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
pub fn EventTable(events: RwSignal<ListState<EventAnnouncement>>) -> impl IntoView {
    view! {
        <DataTable
            headers=EVENT_HEADERS
            state=Signal::derive(move || events.with(TableState::from_list))
            empty_message="No upcoming events"
        />
    }
}
