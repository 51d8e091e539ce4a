pub mod guard;
pub mod image;
pub mod layout;
pub mod search;
pub mod table;
