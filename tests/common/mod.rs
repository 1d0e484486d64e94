#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

use async_trait::async_trait;
use pesquera_admin::domain::catalog::Resource;
use pesquera_admin::domain::notification::Notification;
use pesquera_admin::domain::types::{EntityId, NotificationId, UserId};
use pesquera_admin::domain::user::User;
use pesquera_admin::repository::errors::{RepositoryError, RepositoryResult};
use pesquera_admin::repository::{
    CatalogReader, CatalogWriter, NotificationListQuery, NotificationReader, NotificationWriter,
};
use serde::Serialize;
use serde_json::Value;

pub fn manager() -> User {
    User {
        id: UserId::new(1).unwrap(),
        nombre: "Jefa de planta".to_string(),
        email: Some("jefa@pesquera.cl".to_string()),
        is_admin: true,
        is_superuser: false,
        roles: vec!["catalogos".to_string()],
    }
}

pub fn viewer() -> User {
    User {
        id: UserId::new(2).unwrap(),
        nombre: "Operador".to_string(),
        email: None,
        is_admin: false,
        is_superuser: false,
        roles: vec!["catalogos".to_string()],
    }
}

/// In-memory catalog backend. Writes record the JSON body they received and
/// store it as a record, so the following reload sees it.
pub struct FakeCatalog<R> {
    pub records: Mutex<Vec<R>>,
    pub bodies: Mutex<Vec<Value>>,
    pub deleted: Mutex<Vec<EntityId>>,
    pub list_calls: AtomicUsize,
    pub fail_requests: AtomicBool,
    next_id: AtomicU64,
}

impl<R: Resource> FakeCatalog<R> {
    pub fn new(records: Vec<R>) -> Self {
        let next_id = records.iter().map(|r| r.id().get()).max().unwrap_or(0) as u64 + 1;
        Self {
            records: Mutex::new(records),
            bodies: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
            fail_requests: AtomicBool::new(false),
            next_id: AtomicU64::new(next_id),
        }
    }

    pub fn from_json(records: Value) -> Self {
        Self::new(serde_json::from_value(records).unwrap())
    }

    pub fn fail(&self) {
        self.fail_requests.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> RepositoryResult<()> {
        if self.fail_requests.load(Ordering::SeqCst) {
            Err(RepositoryError::Status {
                status: 500,
                message: "Error interno del servidor".to_string(),
            })
        } else {
            Ok(())
        }
    }

    fn store(&self, id: EntityId, payload: Value) -> RepositoryResult<R> {
        let mut body = payload;
        body["id"] = Value::from(id.get());
        serde_json::from_value(body).map_err(|e| RepositoryError::Decode(e.to_string()))
    }
}

#[async_trait]
impl<R: Resource> CatalogReader<R> for FakeCatalog<R> {
    async fn list_records(&self) -> RepositoryResult<Vec<R>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.records.lock().unwrap().clone())
    }

    async fn get_record(&self, id: EntityId) -> RepositoryResult<Option<R>> {
        self.check()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id() == id)
            .cloned())
    }
}

#[async_trait]
impl<R: Resource> CatalogWriter<R> for FakeCatalog<R> {
    async fn create_record<P>(&self, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync,
    {
        self.check()?;
        let body = serde_json::to_value(payload).unwrap();
        self.bodies.lock().unwrap().push(body.clone());
        let id = EntityId::new(self.next_id.fetch_add(1, Ordering::SeqCst) as i64).unwrap();
        let record = self.store(id, body)?;
        self.records.lock().unwrap().push(record.clone());
        Ok(Some(record))
    }

    async fn update_record<P>(&self, id: EntityId, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync,
    {
        self.check()?;
        let body = serde_json::to_value(payload).unwrap();
        self.bodies.lock().unwrap().push(body.clone());
        let record = self.store(id, body)?;
        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id() == id) {
            Some(existing) => *existing = record.clone(),
            None => return Err(RepositoryError::NotFound),
        }
        Ok(Some(record))
    }

    async fn delete_record(&self, id: EntityId) -> RepositoryResult<()> {
        self.check()?;
        self.deleted.lock().unwrap().push(id);
        self.records.lock().unwrap().retain(|r| r.id() != id);
        Ok(())
    }
}

/// Notification backend that only answers the unread counter and counts calls.
pub struct CountingNotifications {
    pub unread: AtomicU64,
    pub count_calls: AtomicUsize,
    pub fail_counts: AtomicBool,
}

impl CountingNotifications {
    pub fn new(unread: u64) -> Self {
        Self {
            unread: AtomicU64::new(unread),
            count_calls: AtomicUsize::new(0),
            fail_counts: AtomicBool::new(false),
        }
    }

    pub fn calls(&self) -> usize {
        self.count_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationReader for CountingNotifications {
    async fn list_notifications(
        &self,
        _query: NotificationListQuery,
    ) -> RepositoryResult<Vec<Notification>> {
        Ok(Vec::new())
    }

    async fn count_unread_notifications(&self) -> RepositoryResult<u64> {
        self.count_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_counts.load(Ordering::SeqCst) {
            return Err(RepositoryError::Network("connection reset".to_string()));
        }
        Ok(self.unread.load(Ordering::SeqCst))
    }
}

#[async_trait]
impl NotificationWriter for CountingNotifications {
    async fn mark_notification_read(&self, _id: NotificationId) -> RepositoryResult<()> {
        Ok(())
    }

    async fn mark_all_notifications_read(&self) -> RepositoryResult<()> {
        Ok(())
    }

    async fn delete_notification(&self, _id: NotificationId) -> RepositoryResult<()> {
        Ok(())
    }
}
