pub mod admin_reports;
pub mod lecturer_events;
pub mod lecturer_profile;
pub mod lecturer_students;
pub mod login;
pub mod shared;

pub use admin_reports::AdminReportsPage;
pub use lecturer_events::LecturerEventsPage;
pub use lecturer_profile::LecturerProfilePage;
pub use lecturer_students::LecturerStudentsPage;
pub use login::LoginPage;
