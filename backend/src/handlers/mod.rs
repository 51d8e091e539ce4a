pub mod admin;
pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod events;
pub mod health;
pub mod lecturer;
pub mod profile;

mod form;

#[cfg(test)]
mod tests;
