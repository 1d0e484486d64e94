//! Data access over the ERP REST backend.
//!
//! Services and stores only see the reader/writer traits below;
//! [`HttpRepository`] is the production implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::catalog::Resource;
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::types::{EntityId, NotificationId};
use crate::repository::errors::RepositoryResult;

pub mod catalog;
pub mod errors;
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod notification;

pub use http::HttpRepository;

/// Supplies the bearer token attached to every request.
pub trait TokenSource: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Filters accepted by `GET /notificaciones`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leida: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl NotificationListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read(mut self, leida: bool) -> Self {
        self.leida = Some(leida);
        self
    }

    pub fn kind(mut self, kind: NotificationKind) -> Self {
        self.tipo = Some(kind.as_str().to_string());
        self
    }

    pub fn paginate(mut self, limit: usize, offset: usize) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}

#[async_trait]
pub trait CatalogReader<R: Resource>: Send + Sync {
    async fn list_records(&self) -> RepositoryResult<Vec<R>>;
    /// `Ok(None)` when the backend answers 404.
    async fn get_record(&self, id: EntityId) -> RepositoryResult<Option<R>>;
}

/// Writes return the record echoed by the backend, when it echoes one.
#[async_trait]
pub trait CatalogWriter<R: Resource>: Send + Sync {
    async fn create_record<P>(&self, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync;
    async fn update_record<P>(&self, id: EntityId, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync;
    async fn delete_record(&self, id: EntityId) -> RepositoryResult<()>;
}

#[async_trait]
pub trait NotificationReader: Send + Sync {
    async fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> RepositoryResult<Vec<Notification>>;
    async fn count_unread_notifications(&self) -> RepositoryResult<u64>;
}

#[async_trait]
pub trait NotificationWriter: Send + Sync {
    async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
    async fn mark_all_notifications_read(&self) -> RepositoryResult<()>;
    async fn delete_notification(&self, id: NotificationId) -> RepositoryResult<()>;
}

/// Everything the notification store needs, usable as a trait object.
pub trait NotificationRepository: NotificationReader + NotificationWriter {}

impl<T> NotificationRepository for T where T: NotificationReader + NotificationWriter {}
