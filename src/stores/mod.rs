//! Client-side state shared across pages: the session and the notifications.

pub mod auth;
pub mod notifications;

pub use auth::AuthStore;
pub use notifications::{NotificationState, NotificationStore};
