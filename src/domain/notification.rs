//! User notifications shown by the header bell.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::domain::types::{NotificationId, flexible_datetime};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub titulo: String,
    pub mensaje: String,
    #[serde(default)]
    pub tipo: NotificationKind,
    #[serde(default)]
    pub leida: bool,
    #[serde(default, with = "flexible_datetime")]
    pub fecha_lectura: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime", alias = "created_at")]
    pub fecha_creacion: Option<DateTime<Utc>>,
    /// Route the user is sent to when the notification is activated.
    #[serde(default)]
    pub url_destino: Option<String>,
    #[serde(default)]
    pub metadata: Value,
}

impl Notification {
    /// Flips the notification to read. Returns `true` only when it was unread.
    pub fn mark_read(&mut self, at: DateTime<Utc>) -> bool {
        if self.leida {
            return false;
        }
        self.leida = true;
        self.fecha_lectura = Some(at);
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Exito,
    Advertencia,
    Error,
    Other(String),
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Exito => "exito",
            NotificationKind::Advertencia => "advertencia",
            NotificationKind::Error => "error",
            NotificationKind::Other(s) => s,
        }
    }
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for NotificationKind {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "info" => NotificationKind::Info,
            "exito" | "éxito" | "success" => NotificationKind::Exito,
            "advertencia" | "warning" => NotificationKind::Advertencia,
            "error" => NotificationKind::Error,
            _ => NotificationKind::Other(s.to_string()),
        }
    }
}

impl From<String> for NotificationKind {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl Serialize for NotificationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NotificationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // An explicit `null` means the backend did not classify it.
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(NotificationKind::from).unwrap_or_default())
    }
}
