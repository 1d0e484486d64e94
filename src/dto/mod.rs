//! View models handed to the rendering layer.

pub mod bell;
pub mod catalog;

pub use bell::{BellItem, BellView};
pub use catalog::{CatalogTableView, DeleteConfirmation};
