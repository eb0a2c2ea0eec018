pub mod classify;
pub mod layout;
pub mod query;
