//! Transient toast notifications.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a toast stays on screen unless a caller asks otherwise.
pub const DEFAULT_LIFE_MS: i64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Toast {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Milliseconds on screen.
    pub life_ms: i64,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life_ms: DEFAULT_LIFE_MS,
            created_at: Utc::now(),
        }
    }

    pub fn with_life_ms(mut self, life_ms: i64) -> Self {
        self.life_ms = life_ms;
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.created_at + Duration::milliseconds(self.life_ms) <= now
    }
}

/// Shared queue; clones push into the same list.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, toast: Toast) {
        self.lock().push_back(toast);
    }

    pub fn success(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Toast::new(Severity::Success, summary, detail));
    }

    pub fn info(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Toast::new(Severity::Info, summary, detail));
    }

    pub fn warn(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Toast::new(Severity::Warn, summary, detail));
    }

    pub fn error(&self, summary: impl Into<String>, detail: impl Into<String>) {
        self.push(Toast::new(Severity::Error, summary, detail));
    }

    /// Visible toasts, oldest first.
    pub fn snapshot(&self) -> Vec<Toast> {
        self.lock().iter().cloned().collect()
    }

    /// Removes and returns every queued toast.
    pub fn drain(&self) -> Vec<Toast> {
        self.lock().drain(..).collect()
    }

    /// Drops toasts whose life is over.
    pub fn expire(&self, now: DateTime<Utc>) {
        self.lock().retain(|toast| !toast.is_expired(now));
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
