use async_trait::async_trait;
use reqwest::Method;

use crate::domain::notification::Notification;
use crate::domain::types::NotificationId;
use crate::models::api::{ListEnvelope, UnreadCountResponse};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    HttpRepository, NotificationListQuery, NotificationReader, NotificationWriter,
};

const NOTIFICATIONS_PATH: &str = "notificaciones";

#[async_trait]
impl NotificationReader for HttpRepository {
    async fn list_notifications(
        &self,
        query: NotificationListQuery,
    ) -> RepositoryResult<Vec<Notification>> {
        let request = self.request(Method::GET, NOTIFICATIONS_PATH).query(&query);
        let envelope: ListEnvelope<Notification> = self.send_json(request).await?;
        Ok(envelope.into_items())
    }

    async fn count_unread_notifications(&self) -> RepositoryResult<u64> {
        let request = self.request(
            Method::GET,
            &format!("{NOTIFICATIONS_PATH}/no-leidas/count"),
        );
        let body: UnreadCountResponse = self.send_json(request).await?;
        Ok(body.count())
    }
}

#[async_trait]
impl NotificationWriter for HttpRepository {
    async fn mark_notification_read(&self, id: NotificationId) -> RepositoryResult<()> {
        let request = self.request(Method::PUT, &format!("{NOTIFICATIONS_PATH}/{id}/leida"));
        self.send(request).await?;
        Ok(())
    }

    async fn mark_all_notifications_read(&self) -> RepositoryResult<()> {
        let request = self.request(
            Method::PUT,
            &format!("{NOTIFICATIONS_PATH}/marcar-todas-leidas"),
        );
        self.send(request).await?;
        Ok(())
    }

    async fn delete_notification(&self, id: NotificationId) -> RepositoryResult<()> {
        let request = self.request(Method::DELETE, &format!("{NOTIFICATIONS_PATH}/{id}"));
        self.send(request).await?;
        Ok(())
    }
}
