//! Application context: the stores and shared widgets, created once at start
//! and torn down on logout.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::user::User;
use crate::forms::CatalogForm;
use crate::models::config::AppConfig;
use crate::models::session::PersistedSession;
use crate::pages::CatalogPage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{HttpRepository, TokenSource};
use crate::stores::{AuthStore, NotificationStore};
use crate::widgets::NotificationBell;
use crate::widgets::menu::{self, MenuItem};
use crate::widgets::progress::ProgressDialog;
use crate::widgets::toast::ToastQueue;

pub struct App {
    config: AppConfig,
    auth: Arc<AuthStore>,
    repo: Arc<HttpRepository>,
    notifications: NotificationStore,
    toasts: ToastQueue,
    progress: ProgressDialog,
}

impl App {
    pub fn new(config: AppConfig) -> RepositoryResult<Self> {
        let config = config.normalized();
        let auth = Arc::new(AuthStore::new());
        let tokens: Arc<dyn TokenSource> = auth.clone();
        let repo = Arc::new(HttpRepository::from_config(&config, tokens)?);
        let notifications = NotificationStore::new(repo.clone());

        Ok(Self {
            config,
            auth,
            repo,
            notifications,
            toasts: ToastQueue::new(),
            progress: ProgressDialog::new(),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn repository(&self) -> Arc<HttpRepository> {
        Arc::clone(&self.repo)
    }

    pub fn notifications(&self) -> &NotificationStore {
        &self.notifications
    }

    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    pub fn progress(&self) -> &ProgressDialog {
        &self.progress
    }

    /// Loads the session file named by `auth_state_path`, if configured.
    pub fn restore_session(&self) -> io::Result<bool> {
        match &self.config.auth_state_path {
            Some(path) => self.auth.load_persisted(path),
            None => Ok(false),
        }
    }

    pub fn login(&self, session: PersistedSession) {
        self.auth.login(session);
    }

    /// Stops polling, forgets notifications and drops the session.
    pub fn logout(&self) {
        self.notifications.clear();
        self.toasts.drain();
        self.auth.logout();
    }

    pub fn current_user(&self) -> Option<User> {
        self.auth.current_user()
    }

    pub fn catalog_page<F: CatalogForm>(&self) -> CatalogPage<F, HttpRepository> {
        CatalogPage::new(
            self.repository(),
            self.toasts.clone(),
            self.progress.clone(),
            self.config.table_rows_per_page,
        )
    }

    pub fn notification_bell(&self) -> NotificationBell {
        NotificationBell::new(
            self.notifications.clone(),
            self.toasts.clone(),
            Duration::from_millis(self.config.notification_poll_interval_ms),
            self.config.notification_page_size,
        )
    }

    /// Header navigation for the signed-in user; empty when signed out.
    pub fn header_menu(&self) -> Vec<MenuItem> {
        self.current_user()
            .map(|user| menu::header_menu(&user))
            .unwrap_or_default()
    }
}
