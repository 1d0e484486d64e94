//! Response envelopes returned by the backend.

use serde::Deserialize;

/// List endpoints answer either with a bare array or with `{ "data": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Bare(Vec<T>),
    Wrapped { data: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Bare(items) | ListEnvelope::Wrapped { data: items } => items,
        }
    }
}

/// Single-record endpoints follow the same two shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> RecordEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            RecordEnvelope::Bare(item) | RecordEnvelope::Wrapped { data: item } => item,
        }
    }
}

/// Body of `GET /notificaciones/no-leidas/count`: `{ "count": n }` or a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UnreadCountResponse {
    Bare(u64),
    Wrapped {
        #[serde(alias = "total", alias = "no_leidas")]
        count: u64,
    },
}

impl UnreadCountResponse {
    pub fn count(&self) -> u64 {
        match self {
            UnreadCountResponse::Bare(count) | UnreadCountResponse::Wrapped { count } => *count,
        }
    }
}

/// Error body; the backend is not consistent about the key it uses.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error, self.detail]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}
