use std::sync::Arc;

use crate::{
    config::Config,
    db::connection::DbPool,
    repositories::{
        AttendanceRepository, AttendanceRepositoryTrait, EventRepository, EventRepositoryTrait,
        ReportRepository, ReportRepositoryTrait, SubmissionRepository, SubmissionRepositoryTrait,
        UserRepository, UserRepositoryTrait,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub config: Config,
    pub users: Arc<dyn UserRepositoryTrait>,
    pub reports: Arc<dyn ReportRepositoryTrait>,
    pub events: Arc<dyn EventRepositoryTrait>,
    pub attendance: Arc<dyn AttendanceRepositoryTrait>,
    pub submissions: Arc<dyn SubmissionRepositoryTrait>,
}

impl AppState {
    /// State wired to the PostgreSQL-backed repositories.
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            config,
            users: Arc::new(UserRepository::new()),
            reports: Arc::new(ReportRepository::new()),
            events: Arc::new(EventRepository::new()),
            attendance: Arc::new(AttendanceRepository::new()),
            submissions: Arc::new(SubmissionRepository::new()),
        }
    }

    pub fn with_users(mut self, users: impl UserRepositoryTrait + 'static) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub fn with_reports(mut self, reports: impl ReportRepositoryTrait + 'static) -> Self {
        self.reports = Arc::new(reports);
        self
    }

    pub fn with_events(mut self, events: impl EventRepositoryTrait + 'static) -> Self {
        self.events = Arc::new(events);
        self
    }

    pub fn with_attendance(mut self, attendance: impl AttendanceRepositoryTrait + 'static) -> Self {
        self.attendance = Arc::new(attendance);
        self
    }

    pub fn with_submissions(
        mut self,
        submissions: impl SubmissionRepositoryTrait + 'static,
    ) -> Self {
        self.submissions = Arc::new(submissions);
        self
    }
}
