pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod reconcile;
pub mod router;
pub mod state;
pub mod tasks;
pub mod utils;

#[cfg(test)]
mod test_support;
