use leptos::*;

use super::view_model::use_admin_reports_view_model;
use crate::{
    api::{LecturerReportRow, Profile, StudentReportRow},
    components::{
        image::FallbackImage,
        layout::{ErrorMessage, Layout, LoadingSpinner},
        search::SearchBox,
        table::{display_or_na, DataTable, TableRow, TableState},
    },
    config,
    reconcile::{ListState, LoadState},
};

pub const STUDENT_HEADERS: &[&str] = &["Student Name", "Batch", "Module", "Results"];
pub const LECTURER_HEADERS: &[&str] = &["Lecturer Name", "Department", "Module", "Email", "Contact"];

impl TableRow for StudentReportRow {
    fn cells(&self) -> Vec<String> {
        vec![
            display_or_na(Some(&self.student_name)),
            display_or_na(self.batch_no.as_deref()),
            display_or_na(self.module.as_deref()),
            display_or_na(self.results.as_deref()),
        ]
    }
}

impl TableRow for LecturerReportRow {
    fn cells(&self) -> Vec<String> {
        vec![
            display_or_na(Some(&self.lecturer_name)),
            display_or_na(self.department.as_deref()),
            display_or_na(self.module.as_deref()),
            display_or_na(self.email.as_deref()),
            display_or_na(self.contact_number.as_deref()),
        ]
    }
}

#[component]
pub fn AdminReportsPanel() -> impl IntoView {
    let vm = use_admin_reports_view_model();
    // Only a failure swaps the view; Loading -> Ready keeps the tables mounted.
    let failure = create_memo(move |_| match vm.profile.get() {
        LoadState::Failed(error) => Some(error.to_string()),
        _ => None,
    });

    view! {
        <Layout>
            <Show
                when=move || failure.with(Option::is_none)
                fallback=move || view! {
                    <ErrorMessage message=format!(
                        "Could not load the admin profile: {}",
                        failure.get().unwrap_or_default()
                    ) />
                }
            >
                <div class="space-y-8">
                    {move || view! { <ProfileHeader state=vm.profile.get() /> }}
                    <ReportSection title="Student Reports">
                        <StudentReportTable state=vm.students />
                    </ReportSection>
                    <ReportSection title="Lecturer Reports">
                        <LecturerReportTable state=vm.lecturers />
                    </ReportSection>
                </div>
            </Show>
        </Layout>
    }
}

#[component]
pub fn ProfileHeader(state: LoadState<Profile>) -> impl IntoView {
    let Some(profile) = state.ready().cloned() else {
        return view! { <LoadingSpinner /> }.into_view();
    };
    let image = profile
        .profile_image
        .as_deref()
        .map(config::asset_url)
        .unwrap_or_default();
    let name = profile.display_name().unwrap_or_else(|| display_or_na(None));

    view! {
        <section class="flex items-center gap-4 rounded-lg bg-surface-elevated p-4 shadow-sm">
            <FallbackImage src=Signal::derive(move || image.clone()) alt="Admin profile" class="h-16 w-16 rounded-full object-cover" />
            <div>
                <h2 class="text-lg font-semibold text-fg">{name}</h2>
                <p class="text-sm text-fg-muted">{profile.role.as_str()}</p>
                <p class="text-sm text-fg-muted">{display_or_na(profile.email.as_deref())}</p>
                <p class="text-sm text-fg-muted">{display_or_na(profile.department.as_deref())}</p>
            </div>
        </section>
    }
    .into_view()
}

#[component]
fn ReportSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="space-y-3">
            <h3 class="text-base font-semibold text-fg">{title}</h3>
            {children()}
        </section>
    }
}

#[component]
pub fn StudentReportTable(state: RwSignal<ListState<StudentReportRow>>) -> impl IntoView {
    view! {
        <SearchBox
            placeholder="Search by student name"
            value=Signal::derive(move || state.with(|s| s.term().to_string()))
            on_input=move |term: String| state.update(|s| s.set_term(term))
        />
        <DataTable
            headers=STUDENT_HEADERS
            state=Signal::derive(move || state.with(TableState::from_list))
            empty_message="No students found"
        />
    }
}

#[component]
pub fn LecturerReportTable(state: RwSignal<ListState<LecturerReportRow>>) -> impl IntoView {
    view! {
        <SearchBox
            placeholder="Search by lecturer name"
            value=Signal::derive(move || state.with(|s| s.term().to_string()))
            on_input=move |term: String| state.update(|s| s.set_term(term))
        />
        <DataTable
            headers=LECTURER_HEADERS
            state=Signal::derive(move || state.with(TableState::from_list))
            empty_message="No lecturers found"
        />
    }
}
