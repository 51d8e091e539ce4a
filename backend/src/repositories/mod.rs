pub mod attendance;
pub mod event;
pub mod report;
pub mod submit_assignment;
pub mod user;

pub use attendance::{AttendanceRepository, AttendanceRepositoryTrait};
pub use event::{EventRepository, EventRepositoryTrait};
pub use report::{ReportRepository, ReportRepositoryTrait};
pub use submit_assignment::{SubmissionRepository, SubmissionRepositoryTrait};
pub use user::{UserRepository, UserRepositoryTrait};
