//! Client-side notification store: list, unread counter and the poll timer.
//!
//! State lives in a `watch` channel so widgets can subscribe to changes. Each
//! operation is the single writer of the fields it touches. The poll timer only
//! refreshes the unread counter; the list is reloaded when the bell opens.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::domain::notification::Notification;
use crate::domain::types::NotificationId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{NotificationListQuery, NotificationRepository};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    pub unread_count: u64,
    pub loading: bool,
    /// Message of the last failed load or poll; cleared by the next success.
    pub last_error: Option<String>,
}

/// Cloneable handle; clones share state and the poll timer.
#[derive(Clone)]
pub struct NotificationStore {
    repo: Arc<dyn NotificationRepository>,
    state: Arc<watch::Sender<NotificationState>>,
    poller: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl NotificationStore {
    pub fn new(repo: Arc<dyn NotificationRepository>) -> Self {
        let (state, _) = watch::channel(NotificationState::default());
        Self {
            repo,
            state: Arc::new(state),
            poller: Arc::new(Mutex::new(None)),
        }
    }

    pub fn snapshot(&self) -> NotificationState {
        self.state.borrow().clone()
    }

    pub fn unread_count(&self) -> u64 {
        self.state.borrow().unread_count
    }

    pub fn subscribe(&self) -> watch::Receiver<NotificationState> {
        self.state.subscribe()
    }

    /// Replaces the local list with the filtered server list.
    pub async fn load(&self, query: NotificationListQuery) -> RepositoryResult<Vec<Notification>> {
        self.state.send_modify(|s| s.loading = true);

        let result = self.repo.list_notifications(query).await;

        self.state.send_modify(|s| {
            s.loading = false;
            match &result {
                Ok(items) => {
                    s.items = items.clone();
                    s.last_error = None;
                }
                Err(err) => s.last_error = Some(err.user_message()),
            }
        });

        result
    }

    pub async fn refresh_unread_count(&self) -> RepositoryResult<u64> {
        refresh_count(self.repo.as_ref(), &self.state).await
    }

    /// Marks one notification as read, locally first.
    ///
    /// An id already read in the local list is a no-op. An id missing from the
    /// local list is marked remotely and the counter is re-fetched.
    pub async fn mark_read(&self, id: NotificationId) -> RepositoryResult<()> {
        let now = Utc::now();
        let mut known = false;
        let mut flipped = false;

        self.state.send_if_modified(|s| {
            for notification in s.items.iter_mut().filter(|n| n.id == id) {
                known = true;
                flipped |= notification.mark_read(now);
            }
            if flipped {
                s.unread_count = s.unread_count.saturating_sub(1);
            }
            flipped
        });

        if known && !flipped {
            return Ok(());
        }

        self.repo.mark_notification_read(id).await?;

        if !known {
            self.refresh_unread_count().await?;
        }

        Ok(())
    }

    pub async fn mark_all_read(&self) -> RepositoryResult<()> {
        let now = Utc::now();
        self.state.send_modify(|s| {
            for notification in &mut s.items {
                notification.mark_read(now);
            }
            s.unread_count = 0;
        });

        self.repo.mark_all_notifications_read().await
    }

    /// Deletes remotely, then locally. An id missing from the local list
    /// re-fetches the counter, as in [`Self::mark_read`].
    pub async fn delete(&self, id: NotificationId) -> RepositoryResult<()> {
        self.repo.delete_notification(id).await?;

        let mut known = false;
        self.state.send_if_modified(|s| {
            let removed_unread = s.items.iter().any(|n| n.id == id && !n.leida);
            let before = s.items.len();
            s.items.retain(|n| n.id != id);
            if removed_unread {
                s.unread_count = s.unread_count.saturating_sub(1);
            }
            known = s.items.len() != before;
            known
        });

        if !known {
            self.refresh_unread_count().await?;
        }

        Ok(())
    }

    /// Starts the unread-count timer. Returns `false` when it is already running.
    ///
    /// The first refresh happens one full interval after the call. Must be
    /// called from within a Tokio runtime.
    pub fn start_polling(&self, interval: Duration) -> bool {
        let mut poller = self.poller.lock().unwrap_or_else(PoisonError::into_inner);
        if poller.as_ref().is_some_and(|handle| !handle.is_finished()) {
            log::debug!("Notification polling already running");
            return false;
        }

        let interval = if interval.is_zero() {
            DEFAULT_POLL_INTERVAL
        } else {
            interval
        };
        let repo = Arc::clone(&self.repo);
        let state = Arc::clone(&self.state);

        *poller = Some(tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if let Err(err) = refresh_count(repo.as_ref(), &state).await {
                    log::warn!("Notification poll failed: {err}");
                }
            }
        }));

        log::info!("Notification polling started every {interval:?}");
        true
    }

    /// Stops the timer. Returns `false` when it was not running.
    pub fn stop_polling(&self) -> bool {
        let handle = self
            .poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match handle {
            Some(handle) => {
                handle.abort();
                log::info!("Notification polling stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Logout teardown: stops the timer and forgets every notification.
    pub fn clear(&self) {
        self.stop_polling();
        self.state.send_replace(NotificationState::default());
    }
}

async fn refresh_count(
    repo: &dyn NotificationRepository,
    state: &watch::Sender<NotificationState>,
) -> RepositoryResult<u64> {
    let count = match repo.count_unread_notifications().await {
        Ok(count) => count,
        Err(err) => {
            state.send_modify(|s| s.last_error = Some(err.user_message()));
            return Err(err);
        }
    };
    state.send_if_modified(|s| {
        if s.unread_count == count && s.last_error.is_none() {
            false
        } else {
            s.unread_count = count;
            s.last_error = None;
            true
        }
    });
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use serde_json::Value;

    use super::*;
    use crate::domain::notification::NotificationKind;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn notification(id: i64, leida: bool) -> Notification {
        Notification {
            id: NotificationId::new(id).unwrap(),
            titulo: format!("Aviso {id}"),
            mensaje: "Descarga programada".to_string(),
            tipo: NotificationKind::Info,
            leida,
            fecha_lectura: None,
            fecha_creacion: None,
            url_destino: None,
            metadata: Value::Null,
        }
    }

    async fn loaded_store(mut repo: MockRepository, items: Vec<Notification>) -> NotificationStore {
        let unread = items.iter().filter(|n| !n.leida).count() as u64;
        repo.expect_list_notifications()
            .times(1)
            .returning(move |_| Ok(items.clone()));
        repo.expect_count_unread_notifications()
            .returning(move || Ok(unread));

        let store = NotificationStore::new(Arc::new(repo));
        store.load(NotificationListQuery::new()).await.unwrap();
        store.refresh_unread_count().await.unwrap();
        store
    }

    #[tokio::test]
    async fn mark_read_decrements_once_and_calls_remote_once() {
        let mut repo = MockRepository::new();
        repo.expect_mark_notification_read()
            .times(1)
            .returning(|_| Ok(()));
        let store = loaded_store(repo, vec![notification(1, false), notification(2, false)]).await;
        assert_eq!(store.unread_count(), 2);

        let id = NotificationId::new(1).unwrap();
        store.mark_read(id).await.unwrap();
        store.mark_read(id).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.unread_count, 1);
        assert!(state.items[0].leida);
        assert!(state.items[0].fecha_lectura.is_some());
        assert!(!state.items[1].leida);
    }

    #[tokio::test]
    async fn mark_read_never_goes_below_zero() {
        let mut repo = MockRepository::new();
        repo.expect_list_notifications()
            .returning(|_| Ok(vec![notification(1, false)]));
        repo.expect_mark_notification_read().returning(|_| Ok(()));
        let store = NotificationStore::new(Arc::new(repo));
        store.load(NotificationListQuery::new()).await.unwrap();
        assert_eq!(store.unread_count(), 0);

        store.mark_read(NotificationId::new(1).unwrap()).await.unwrap();

        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn mark_read_failure_is_returned_to_the_caller() {
        let mut repo = MockRepository::new();
        repo.expect_mark_notification_read()
            .times(1)
            .returning(|_| Err(RepositoryError::Network("offline".to_string())));
        let store = loaded_store(repo, vec![notification(4, false)]).await;

        let result = store.mark_read(NotificationId::new(4).unwrap()).await;

        assert!(matches!(result, Err(RepositoryError::Network(_))));
        // The local flip stays; the next poll reconciles the counter.
        assert_eq!(store.unread_count(), 0);
    }

    #[tokio::test]
    async fn mark_read_of_unknown_id_refreshes_the_counter() {
        let mut repo = MockRepository::new();
        repo.expect_mark_notification_read()
            .withf(|id| id.get() == 99)
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_count_unread_notifications()
            .times(1)
            .returning(|| Ok(6));
        let store = NotificationStore::new(Arc::new(repo));

        store.mark_read(NotificationId::new(99).unwrap()).await.unwrap();

        assert_eq!(store.unread_count(), 6);
    }

    #[tokio::test]
    async fn mark_all_read_clears_counter_and_flags() {
        let mut repo = MockRepository::new();
        repo.expect_mark_all_notifications_read()
            .times(1)
            .returning(|| Ok(()));
        let store = loaded_store(
            repo,
            vec![notification(1, false), notification(2, true), notification(3, false)],
        )
        .await;

        store.mark_all_read().await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.unread_count, 0);
        assert!(state.items.iter().all(|n| n.leida));
    }

    #[tokio::test]
    async fn delete_removes_item_and_adjusts_counter() {
        let mut repo = MockRepository::new();
        repo.expect_delete_notification()
            .times(1)
            .returning(|_| Ok(()));
        let store = loaded_store(repo, vec![notification(1, false), notification(2, true)]).await;

        store.delete(NotificationId::new(1).unwrap()).await.unwrap();

        let state = store.snapshot();
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.unread_count, 0);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_refreshes_the_counter() {
        let server_unread = Arc::new(AtomicU64::new(5));
        let counted = Arc::clone(&server_unread);
        let mut repo = MockRepository::new();
        repo.expect_count_unread_notifications()
            .returning(move || Ok(counted.load(Ordering::SeqCst)));
        repo.expect_delete_notification()
            .withf(|id| id.get() == 42)
            .times(1)
            .returning(move |_| {
                server_unread.fetch_sub(1, Ordering::SeqCst);
                Ok(())
            });
        let store = NotificationStore::new(Arc::new(repo));
        store.refresh_unread_count().await.unwrap();
        assert_eq!(store.unread_count(), 5);

        store.delete(NotificationId::new(42).unwrap()).await.unwrap();

        assert_eq!(store.unread_count(), 4);
    }

    #[tokio::test]
    async fn failed_delete_keeps_local_state() {
        let mut repo = MockRepository::new();
        repo.expect_delete_notification().returning(|_| {
            Err(RepositoryError::Status {
                status: 500,
                message: "boom".to_string(),
            })
        });
        let store = loaded_store(repo, vec![notification(1, false)]).await;

        assert!(store.delete(NotificationId::new(1).unwrap()).await.is_err());
        assert_eq!(store.snapshot().items.len(), 1);
        assert_eq!(store.unread_count(), 1);
    }

    #[tokio::test]
    async fn failed_load_clears_loading_flag_and_keeps_items() {
        let mut repo = MockRepository::new();
        repo.expect_list_notifications()
            .times(1)
            .returning(|_| Err(RepositoryError::Network("timeout".to_string())));
        let store = NotificationStore::new(Arc::new(repo));

        assert!(store.load(NotificationListQuery::new()).await.is_err());

        let state = store.snapshot();
        assert!(!state.loading);
        assert!(state.items.is_empty());
        assert_eq!(
            state.last_error.as_deref(),
            Some("No se pudo conectar con el servidor")
        );
    }

    #[tokio::test]
    async fn start_polling_is_idempotent_and_stoppable() {
        let mut repo = MockRepository::new();
        repo.expect_count_unread_notifications().returning(|| Ok(0));
        let store = NotificationStore::new(Arc::new(repo));

        assert!(store.start_polling(Duration::from_secs(30)));
        assert!(!store.start_polling(Duration::from_secs(30)));
        assert!(store.is_polling());

        assert!(store.stop_polling());
        assert!(!store.stop_polling());
        assert!(!store.is_polling());
    }

    #[tokio::test]
    async fn clear_resets_state_and_stops_timer() {
        let mut repo = MockRepository::new();
        repo.expect_count_unread_notifications().returning(|| Ok(3));
        let store = loaded_store(repo, vec![notification(1, false)]).await;
        store.start_polling(Duration::from_secs(30));

        store.clear();

        assert!(!store.is_polling());
        assert_eq!(store.snapshot(), NotificationState::default());
    }
}
