use leptos::*;

use super::repository;
use crate::{
    api::{ApiClient, LecturerReportRow, Profile, StudentReportRow},
    reconcile::{ListState, LoadState},
    tasks::ViewLifetime,
};

#[derive(Clone, Copy)]
pub struct AdminReportsViewModel {
    pub profile: RwSignal<LoadState<Profile>>,
    pub students: RwSignal<ListState<StudentReportRow>>,
    pub lecturers: RwSignal<ListState<LecturerReportRow>>,
}

impl AdminReportsViewModel {
    pub fn new() -> Self {
        Self {
            profile: create_rw_signal(LoadState::Loading),
            students: create_rw_signal(ListState::default()),
            lecturers: create_rw_signal(ListState::default()),
        }
    }
}

impl Default for AdminReportsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Starts the three independent fetches; each writes only its own slice.
pub fn use_admin_reports_view_model() -> AdminReportsViewModel {
    let vm = AdminReportsViewModel::new();
    let Some(api) = use_context::<ApiClient>() else {
        log::error!("ApiClient missing from context");
        return vm;
    };
    let lifetime = ViewLifetime::attach();

    let profile_resource = create_local_resource(|| (), {
        let (api, lifetime) = (api.clone(), lifetime.clone());
        move |_| {
            let (api, lifetime) = (api.clone(), lifetime.clone());
            async move { lifetime.run(repository::load_admin_profile(&api)).await }
        }
    });
    let students_resource = create_local_resource(|| (), {
        let (api, lifetime) = (api.clone(), lifetime.clone());
        move |_| {
            let (api, lifetime) = (api.clone(), lifetime.clone());
            async move { lifetime.run(repository::fetch_student_reports(&api)).await }
        }
    });
    let lecturers_resource = create_local_resource(|| (), move |_| {
        let (api, lifetime) = (api.clone(), lifetime.clone());
        async move { lifetime.run(repository::fetch_lecturer_reports(&api)).await }
    });

    create_effect(move |_| {
        if let Some(result) = profile_resource.get() {
            vm.profile.set(LoadState::from_result(result));
        }
    });
    create_effect(move |_| {
        if let Some(result) = students_resource.get() {
            vm.students.update(|state| state.apply(result, "student report"));
        }
    });
    create_effect(move |_| {
        if let Some(result) = lecturers_resource.get() {
            vm.lecturers.update(|state| state.apply(result, "lecturer report"));
        }
    });

    vm
}
