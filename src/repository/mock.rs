//! Mock repository implementations for isolating stores in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::notification::Notification;
use crate::domain::types::NotificationId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{NotificationListQuery, NotificationReader, NotificationWriter};

mock! {
    pub Repository {}

    #[async_trait]
    impl NotificationReader for Repository {
        async fn list_notifications(
            &self,
            query: NotificationListQuery,
        ) -> RepositoryResult<Vec<Notification>>;
        async fn count_unread_notifications(&self) -> RepositoryResult<u64>;
    }

    #[async_trait]
    impl NotificationWriter for Repository {
        async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()>;
        async fn mark_all_notifications_read(&self) -> RepositoryResult<()>;
        async fn delete_notification(&self, id: NotificationId) -> RepositoryResult<()>;
    }
}
