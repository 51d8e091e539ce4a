use leptos::*;

use super::{
    repository,
    utils::{AttendanceSheet, StudentFilter},
};
use crate::{
    api::{ApiClient, ApiError, AttendanceMark, AttendanceRecord, StudentRow},
    pages::shared::{Message, MessageState},
    reconcile::ListState,
    tasks::ViewLifetime,
};

#[derive(Clone, Copy)]
pub struct StudentsViewModel {
    pub filter: RwSignal<StudentFilter>,
    pub students: RwSignal<ListState<StudentRow>>,
    pub sheet: RwSignal<AttendanceSheet>,
    pub message: RwSignal<MessageState>,
    pub record_action: Action<Vec<AttendanceMark>, Result<Vec<AttendanceRecord>, ApiError>>,
}

impl StudentsViewModel {
    /// Marks cover the whole fetched list, not only the rows matching the search.
    pub fn submit_sheet(&self) {
        if self.record_action.pending().get_untracked() {
            return;
        }
        let filter = self.filter.get_untracked();
        let built = self.students.with_untracked(|state| {
            self.sheet
                .with_untracked(|sheet| sheet.build_marks(state.list.raw(), &filter))
        });
        match built {
            Ok(marks) => {
                self.message.set(None);
                self.record_action.dispatch(marks);
            }
            Err(msg) => self.message.set(Some(Message::Error(msg))),
        }
    }
}

pub fn record_outcome(result: Result<Vec<AttendanceRecord>, ApiError>) -> Option<Message> {
    match result {
        Ok(records) => Some(Message::Success(format!(
            "Attendance recorded for {} students.",
            records.len()
        ))),
        Err(ApiError::Cancelled) => None,
        Err(err) => Some(Message::Error(format!("Could not record attendance: {}", err))),
    }
}

pub fn use_students_view_model() -> StudentsViewModel {
    let api = use_context::<ApiClient>();
    let lifetime = ViewLifetime::attach();
    let filter = create_rw_signal(StudentFilter::default());
    let students = create_rw_signal(ListState::default());
    let sheet = create_rw_signal(AttendanceSheet::default());
    let message = create_rw_signal(None);

    let record_action = create_action({
        let (api, lifetime) = (api.clone(), lifetime.clone());
        move |marks: &Vec<AttendanceMark>| {
            let (api, lifetime, marks) = (api.clone(), lifetime.clone(), marks.clone());
            async move {
                let Some(api) = api else {
                    return Err(ApiError::MissingCredential);
                };
                lifetime.run(repository::submit_attendance(&api, marks)).await
            }
        }
    });

    match api {
        Some(api) => {
            let resource = create_local_resource(
                move || filter.get(),
                move |filter| {
                    let (api, lifetime) = (api.clone(), lifetime.clone());
                    students.update(|state| state.begin_loading());
                    async move { lifetime.run(repository::fetch_students(&api, &filter)).await }
                },
            );
            create_effect(move |_| {
                if let Some(result) = resource.get() {
                    students.update(|state| state.apply(result, "lecturer students"));
                }
            });
        }
        None => log::error!("ApiClient missing from context"),
    }

    create_effect(move |_| {
        if let Some(result) = record_action.value().get() {
            if let Some(status) = record_outcome(result) {
                message.set(Some(status));
            }
        }
    });

    StudentsViewModel {
        filter,
        students,
        sheet,
        message,
        record_action,
    }
}
