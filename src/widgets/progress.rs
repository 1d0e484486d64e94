//! Blocking progress dialog shown while a save or delete is in flight.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared handle; `None` means hidden, `Some(message)` visible.
#[derive(Clone, Debug)]
pub struct ProgressDialog {
    state: Arc<watch::Sender<Option<String>>>,
}

impl Default for ProgressDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressDialog {
    pub fn new() -> Self {
        let (state, _) = watch::channel(None);
        Self {
            state: Arc::new(state),
        }
    }

    /// Shows the dialog until the returned guard is dropped.
    #[must_use = "the dialog hides when the guard is dropped"]
    pub fn show(&self, message: impl Into<String>) -> ProgressGuard {
        self.state.send_replace(Some(message.into()));
        ProgressGuard {
            dialog: self.clone(),
        }
    }

    pub fn hide(&self) {
        self.state.send_replace(None);
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_some()
    }

    pub fn message(&self) -> Option<String> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.state.subscribe()
    }
}

pub struct ProgressGuard {
    dialog: ProgressDialog,
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        self.dialog.hide();
    }
}
