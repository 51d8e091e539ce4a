mod admin;
mod attendance;
mod auth;
pub mod client;
mod lecturer;
pub mod types;

pub use client::*;
pub use lecturer::ProfileUpdate;
pub use types::*;
