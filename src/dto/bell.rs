use serde::Serialize;

use crate::domain::notification::NotificationKind;
use crate::domain::types::NotificationId;

/// Data required to render the header bell and its overlay.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BellView {
    /// Badge text; `None` hides the badge.
    pub badge: Option<String>,
    /// Whether the overlay panel is open.
    pub overlay_open: bool,
    /// Whether the overlay list is being fetched.
    pub loading: bool,
    /// Overlay rows, newest first, one per notification id.
    pub items: Vec<BellItem>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BellItem {
    pub id: NotificationId,
    pub titulo: String,
    /// Sanitised HTML body.
    pub mensaje_html: String,
    pub tipo: NotificationKind,
    pub leida: bool,
    /// Spanish relative time, e.g. "hace 5 minutos".
    pub relative_time: Option<String>,
    pub url_destino: Option<String>,
}
