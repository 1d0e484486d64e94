//! Shared widgets: toasts, progress dialog, header menu and notification bell.

pub mod bell;
pub mod menu;
pub mod progress;
pub mod toast;

pub use bell::NotificationBell;
pub use progress::ProgressDialog;
pub use toast::{Severity, Toast, ToastQueue};
