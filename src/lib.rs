//! Headless admin client for the fisheries ERP: reference-data catalogs,
//! the notification bell and the shared layout widgets.
//!
//! With only the `data` feature the crate exposes the domain types and forms.
//! The `client` feature adds the HTTP repository, stores, page controllers and
//! widgets.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;

#[cfg(feature = "client")]
pub mod app;
#[cfg(feature = "client")]
pub mod dto;
#[cfg(feature = "client")]
mod error_conversions;
#[cfg(feature = "client")]
pub mod models;
#[cfg(feature = "client")]
pub mod pages;
#[cfg(feature = "client")]
pub mod pagination;
#[cfg(feature = "client")]
pub mod repository;
#[cfg(feature = "client")]
pub mod services;
#[cfg(feature = "client")]
pub mod stores;
#[cfg(feature = "client")]
pub mod widgets;
