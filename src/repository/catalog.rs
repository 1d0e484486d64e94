use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;

use crate::domain::catalog::Resource;
use crate::domain::types::EntityId;
use crate::models::api::{ListEnvelope, RecordEnvelope};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::http::decode_echo;
use crate::repository::{CatalogReader, CatalogWriter, HttpRepository};

fn record_path<R: Resource>(id: EntityId) -> String {
    format!("{}/{}", R::PATH, id)
}

#[async_trait]
impl<R: Resource> CatalogReader<R> for HttpRepository {
    async fn list_records(&self) -> RepositoryResult<Vec<R>> {
        let envelope: ListEnvelope<R> = self.send_json(self.request(Method::GET, R::PATH)).await?;
        Ok(envelope.into_items())
    }

    async fn get_record(&self, id: EntityId) -> RepositoryResult<Option<R>> {
        let request = self.request(Method::GET, &record_path::<R>(id));
        match self.send_json::<RecordEnvelope<R>>(request).await {
            Ok(envelope) => Ok(Some(envelope.into_inner())),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

#[async_trait]
impl<R: Resource> CatalogWriter<R> for HttpRepository {
    async fn create_record<P>(&self, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync,
    {
        let request = self.request(Method::POST, R::PATH).json(payload);
        let response = self.send(request).await?;
        decode_echo(response).await
    }

    async fn update_record<P>(&self, id: EntityId, payload: &P) -> RepositoryResult<Option<R>>
    where
        P: Serialize + Sync,
    {
        let request = self
            .request(Method::PUT, &record_path::<R>(id))
            .json(payload);
        let response = self.send(request).await?;
        decode_echo(response).await
    }

    async fn delete_record(&self, id: EntityId) -> RepositoryResult<()> {
        self.send(self.request(Method::DELETE, &record_path::<R>(id)))
            .await?;
        Ok(())
    }
}
