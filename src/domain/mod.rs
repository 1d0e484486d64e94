//! Domain types shared by forms, repositories and page controllers.

pub mod catalog;
pub mod notification;
pub mod types;
pub mod user;
