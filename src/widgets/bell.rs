//! Header notification bell: badge, overlay panel and polling lifecycle.

use std::collections::HashSet;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::notification::Notification;
use crate::domain::types::NotificationId;
use crate::dto::bell::{BellItem, BellView};
use crate::repository::NotificationListQuery;
use crate::repository::errors::RepositoryError;
use crate::stores::NotificationStore;
use crate::widgets::toast::ToastQueue;

/// Largest count shown verbatim on the badge.
pub const BADGE_MAX: u64 = 99;

pub struct NotificationBell {
    store: NotificationStore,
    toasts: ToastQueue,
    poll_interval: Duration,
    page_size: usize,
    overlay_open: bool,
}

impl NotificationBell {
    pub fn new(
        store: NotificationStore,
        toasts: ToastQueue,
        poll_interval: Duration,
        page_size: usize,
    ) -> Self {
        Self {
            store,
            toasts,
            poll_interval,
            page_size: page_size.max(1),
            overlay_open: false,
        }
    }

    /// Fetches the unread count once and starts the poll timer.
    pub async fn mount(&mut self) {
        if let Err(err) = self.store.refresh_unread_count().await {
            log::warn!("Initial unread count failed: {err}");
        }
        self.store.start_polling(self.poll_interval);
    }

    pub fn unmount(&mut self) {
        self.overlay_open = false;
        self.store.stop_polling();
    }

    pub fn is_open(&self) -> bool {
        self.overlay_open
    }

    /// Opens or closes the overlay. Opening reloads the latest notifications.
    pub async fn toggle(&mut self) -> bool {
        if self.overlay_open {
            self.overlay_open = false;
            return false;
        }

        self.overlay_open = true;
        let query = NotificationListQuery::new().paginate(self.page_size, 0);
        if let Err(err) = self.store.load(query).await {
            self.report("No se pudieron cargar las notificaciones", &err);
        }
        true
    }

    pub fn close(&mut self) {
        self.overlay_open = false;
    }

    pub fn badge(&self) -> Option<String> {
        badge_text(self.store.unread_count())
    }

    pub fn view(&self, now: DateTime<Utc>) -> BellView {
        let state = self.store.snapshot();
        BellView {
            badge: badge_text(state.unread_count),
            overlay_open: self.overlay_open,
            loading: state.loading,
            items: overlay_items(&state.items, now),
        }
    }

    /// Marks the notification read, closes the overlay and returns where to navigate.
    pub async fn activate(&mut self, id: NotificationId) -> Option<String> {
        let destination = self
            .store
            .snapshot()
            .items
            .into_iter()
            .find(|n| n.id == id)
            .and_then(|n| n.url_destino);

        if let Err(err) = self.store.mark_read(id).await {
            self.report("No se pudo marcar la notificación", &err);
        }

        self.overlay_open = false;
        destination
    }

    pub async fn mark_all_read(&mut self) {
        match self.store.mark_all_read().await {
            Ok(()) => self
                .toasts
                .success("Notificaciones", "Todas las notificaciones marcadas como leídas"),
            Err(err) => self.report("No se pudieron marcar las notificaciones", &err),
        }
    }

    pub async fn delete(&mut self, id: NotificationId) {
        if let Err(err) = self.store.delete(id).await {
            self.report("No se pudo eliminar la notificación", &err);
        }
    }

    fn report(&self, summary: &str, err: &RepositoryError) {
        log::error!("{summary}: {err}");
        self.toasts.error(summary, err.user_message());
    }
}

/// `None` hides the badge; counts above [`BADGE_MAX`] collapse to "99+".
pub fn badge_text(count: u64) -> Option<String> {
    match count {
        0 => None,
        n if n > BADGE_MAX => Some(format!("{BADGE_MAX}+")),
        n => Some(n.to_string()),
    }
}

fn overlay_items(items: &[Notification], now: DateTime<Utc>) -> Vec<BellItem> {
    let mut sorted: Vec<&Notification> = items.iter().collect();
    // Undated notifications sink to the bottom.
    sorted.sort_by(|a, b| b.fecha_creacion.cmp(&a.fecha_creacion));

    let mut seen = HashSet::new();
    sorted
        .into_iter()
        .filter(|n| seen.insert(n.id))
        .map(|n| BellItem {
            id: n.id,
            titulo: n.titulo.clone(),
            mensaje_html: ammonia::clean(&n.mensaje),
            tipo: n.tipo.clone(),
            leida: n.leida,
            relative_time: n.fecha_creacion.map(|at| relative_time(at, now)),
            url_destino: n.url_destino.clone(),
        })
        .collect()
}

fn plural(n: i64, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("hace 1 {singular}")
    } else {
        format!("hace {n} {plural}")
    }
}

/// Spanish relative time; older than 30 days falls back to the date.
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "hace un momento".to_string()
    } else if minutes < 60 {
        plural(minutes, "minuto", "minutos")
    } else if hours < 24 {
        plural(hours, "hora", "horas")
    } else if days <= 30 {
        plural(days, "día", "días")
    } else {
        at.format("%d/%m/%Y").to_string()
    }
}
