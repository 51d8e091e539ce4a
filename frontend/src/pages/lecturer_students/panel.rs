use leptos::*;

use super::{
    utils::{StudentFilter, BATCH_OPTIONS, MODULE_OPTIONS},
    view_model::{use_students_view_model, StudentsViewModel},
};
use crate::{
    api::{AttendanceStatus, StudentRow},
    components::{
        layout::{ErrorMessage, Layout, SuccessMessage},
        search::SearchBox,
        table::{display_or_na, DataTable, TableRow, TableState},
    },
    pages::shared::Message,
    reconcile::ListState,
};

pub const STUDENT_HEADERS: &[&str] = &["Student ID", "Student Name", "Email", "Batch", "Module"];

// Same row shape as the admin report, different columns.
struct LecturerStudentRow<'a>(&'a StudentRow);

impl TableRow for LecturerStudentRow<'_> {
    fn cells(&self) -> Vec<String> {
        let row = self.0;
        vec![
            display_or_na(row.student_id.as_deref()),
            display_or_na(Some(&row.student_name)),
            display_or_na(row.email.as_deref()),
            display_or_na(row.batch_no.as_deref()),
            display_or_na(row.module.as_deref()),
        ]
    }
}

fn table_state(state: &ListState<StudentRow>) -> TableState {
    if state.is_loading() {
        return TableState::Loading;
    }
    let rows: Vec<_> = state
        .items()
        .iter()
        .map(|row| LecturerStudentRow(row).cells())
        .collect();
    if rows.is_empty() {
        TableState::Empty
    } else {
        TableState::Rows(rows)
    }
}

#[component]
pub fn LecturerStudentsPanel() -> impl IntoView {
    let vm = use_students_view_model();

    view! {
        <Layout>
            <div class="space-y-6">
                <FilterBar filter=vm.filter />
                <SearchBox
                    placeholder="Search by student name"
                    value=Signal::derive(move || vm.students.with(|s| s.term().to_string()))
                    on_input=move |term: String| vm.students.update(|s| s.set_term(term))
                />
                <StudentTable students=vm.students />
                <AttendanceSheetForm vm=vm />
            </div>
        </Layout>
    }
}

#[component]
pub fn FilterBar(filter: RwSignal<StudentFilter>) -> impl IntoView {
    view! {
        <div class="flex gap-4">
            <OptionSelect
                label="Module"
                options=MODULE_OPTIONS
                selected=Signal::derive(move || filter.with(|f| f.module.clone()))
                on_change=move |value: String| filter.update(|f| f.module = value)
            />
            <OptionSelect
                label="Batch"
                options=BATCH_OPTIONS
                selected=Signal::derive(move || filter.with(|f| f.batch.clone()))
                on_change=move |value: String| filter.update(|f| f.batch = value)
            />
        </div>
    }
}

#[component]
fn OptionSelect(
    label: &'static str,
    options: &'static [&'static str],
    selected: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="text-sm">
            <span class="mr-2 text-fg-muted">{label}</span>
            <select
                class="rounded-md border border-border px-3 py-2"
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|option| {
                        let option = *option;
                        view! {
                            <option value=option selected=move || selected.get() == option>
                                {option}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn StudentTable(students: RwSignal<ListState<StudentRow>>) -> impl IntoView {
    view! {
        <DataTable
            headers=STUDENT_HEADERS
            state=Signal::derive(move || students.with(table_state))
            empty_message="No students in this module and batch"
        />
    }
}

#[component]
fn AttendanceSheetForm(vm: StudentsViewModel) -> impl IntoView {
    let pending = vm.record_action.pending();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_sheet();
    };

    view! {
        <form class="space-y-4 rounded-lg border border-border p-4" on:submit=on_submit>
            <h3 class="text-base font-semibold text-fg">"Attendance"</h3>
            {move || match vm.message.get() {
                Some(Message::Success(text)) => view! { <SuccessMessage message=text /> }.into_view(),
                Some(Message::Error(text)) => view! { <ErrorMessage message=text /> }.into_view(),
                None => ().into_view(),
            }}
            <div class="flex gap-4">
                <input
                    type="text"
                    placeholder="Classroom"
                    class="rounded-md border border-border px-3 py-2 text-sm"
                    prop:value=move || vm.sheet.with(|s| s.classroom.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.sheet.update(|s| s.classroom = value);
                    }
                />
                <input
                    type="date"
                    class="rounded-md border border-border px-3 py-2 text-sm"
                    prop:value=move || vm.sheet.with(|s| s.date.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.sheet.update(|s| s.date = value);
                    }
                />
            </div>
            <ul class="divide-y divide-border">
                {move || {
                    vm.students.with(|state| {
                        state
                            .list
                            .raw()
                            .iter()
                            .filter_map(|student| {
                                let id = student.student_id.clone()?;
                                Some(view! { <MarkRow vm=vm id=id name=student.student_name.clone() /> })
                            })
                            .collect_view()
                    })
                }}
            </ul>
            <button
                type="submit"
                class="rounded-md bg-action-primary-bg px-4 py-2 text-sm font-semibold text-action-primary-text disabled:opacity-50"
                disabled=move || pending.get()
            >
                "Record attendance"
            </button>
        </form>
    }
}

#[component]
fn MarkRow(vm: StudentsViewModel, id: String, name: String) -> impl IntoView {
    let status_id = id.clone();
    let on_change = move |ev: ev::Event| {
        if let Some(status) = AttendanceStatus::parse(&event_target_value(&ev)) {
            vm.sheet.update(|sheet| sheet.mark(&id, status));
        }
    };

    view! {
        <li class="flex items-center justify-between py-2 text-sm">
            <span>{name}</span>
            <select class="rounded-md border border-border px-2 py-1" on:change=on_change>
                {AttendanceStatus::ALL
                    .into_iter()
                    .map(|status| {
                        let status_id = status_id.clone();
                        view! {
                            <option
                                value=status.as_str()
                                selected=move || vm.sheet.with(|s| s.status_of(&status_id) == status)
                            >
                                {status.as_str()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </li>
    }
}
