//! Data models shared across database access and API handlers.

pub mod attendance;
pub mod event;
pub mod report;
pub mod submit_assignment;
pub mod user;
