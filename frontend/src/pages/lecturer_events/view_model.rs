use leptos::*;

use super::repository;
use crate::{
    api::{ApiClient, EventAnnouncement},
    reconcile::{ListState, SortOrder},
    tasks::ViewLifetime,
};

#[derive(Clone, Copy)]
pub struct EventsViewModel {
    pub order: RwSignal<SortOrder>,
    pub events: RwSignal<ListState<EventAnnouncement>>,
}

pub fn use_events_view_model() -> EventsViewModel {
    let vm = EventsViewModel {
        order: create_rw_signal(SortOrder::default()),
        events: create_rw_signal(ListState::default()),
    };
    let Some(api) = use_context::<ApiClient>() else {
        log::error!("ApiClient missing from context");
        return vm;
    };
    let lifetime = ViewLifetime::attach();

    // Keyed on the order: switching it refetches and re-sorts.
    let resource = create_local_resource(
        move || vm.order.get(),
        move |order| {
            let (api, lifetime) = (api.clone(), lifetime.clone());
            vm.events.update(|state| state.begin_loading());
            async move { lifetime.run(repository::fetch_events(&api, order)).await }
        },
    );
    create_effect(move |_| {
        if let Some(result) = resource.get() {
            vm.events.update(|state| state.apply(result, "events"));
        }
    });

    vm
}
