//! Wire and persisted shapes kept apart from the domain types.

pub mod api;
pub mod config;
pub mod session;
