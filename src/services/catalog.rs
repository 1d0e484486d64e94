//! Services handling reference-data CRUD workflows.

use crate::domain::catalog::Resource;
use crate::domain::types::EntityId;
use crate::domain::user::User;
use crate::forms::CatalogForm;
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::{ServiceError, ServiceResult, ensure_can_manage};

/// Loads every record of one resource.
pub async fn list_records<R, Repo>(repo: &Repo) -> ServiceResult<Vec<R>>
where
    R: Resource,
    Repo: CatalogReader<R> + ?Sized,
{
    let records = repo.list_records().await?;
    Ok(records)
}

/// Fetches a record and prefills the edit form from it.
pub async fn load_form<F, Repo>(repo: &Repo, id: EntityId) -> ServiceResult<F>
where
    F: CatalogForm,
    Repo: CatalogReader<F::Record> + ?Sized,
{
    let record = repo.get_record(id).await?.ok_or(ServiceError::NotFound)?;

    Ok(F::from_record(&record))
}

/// Validates the form and creates (`target == None`) or updates the record.
///
/// Returns the record echoed by the backend, if any.
pub async fn save_record<F, Repo>(
    repo: &Repo,
    form: &F,
    target: Option<EntityId>,
) -> ServiceResult<Option<F::Record>>
where
    F: CatalogForm,
    Repo: CatalogWriter<F::Record> + ?Sized,
{
    let payload = form.to_payload()?;

    let saved = match target {
        Some(id) => repo.update_record(id, &payload).await?,
        None => repo.create_record(&payload).await?,
    };

    Ok(saved)
}

/// Deletes a record; only admins and superusers may do so.
pub async fn delete_record<R, Repo>(repo: &Repo, user: &User, id: EntityId) -> ServiceResult<()>
where
    R: Resource,
    Repo: CatalogWriter<R> + ?Sized,
{
    ensure_can_manage(user)?;

    repo.delete_record(id).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde::Serialize;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::catalog::AccessType;
    use crate::domain::types::UserId;
    use crate::forms::AccessTypeForm;
    use crate::repository::errors::{RepositoryError, RepositoryResult};

    #[derive(Default)]
    struct FakeRepo {
        records: Vec<AccessType>,
        created: Mutex<Vec<Value>>,
        updated: Mutex<Vec<(EntityId, Value)>>,
        deleted: Mutex<Vec<EntityId>>,
    }

    #[async_trait]
    impl CatalogReader<AccessType> for FakeRepo {
        async fn list_records(&self) -> RepositoryResult<Vec<AccessType>> {
            Ok(self.records.clone())
        }

        async fn get_record(&self, id: EntityId) -> RepositoryResult<Option<AccessType>> {
            Ok(self.records.iter().find(|r| r.id == id).cloned())
        }
    }

    #[async_trait]
    impl CatalogWriter<AccessType> for FakeRepo {
        async fn create_record<P>(&self, payload: &P) -> RepositoryResult<Option<AccessType>>
        where
            P: Serialize + Sync,
        {
            let body = serde_json::to_value(payload).map_err(|e| RepositoryError::Request(e.to_string()))?;
            self.created.lock().unwrap().push(body);
            Ok(None)
        }

        async fn update_record<P>(
            &self,
            id: EntityId,
            payload: &P,
        ) -> RepositoryResult<Option<AccessType>>
        where
            P: Serialize + Sync,
        {
            let body = serde_json::to_value(payload).map_err(|e| RepositoryError::Request(e.to_string()))?;
            self.updated.lock().unwrap().push((id, body));
            Ok(None)
        }

        async fn delete_record(&self, id: EntityId) -> RepositoryResult<()> {
            self.deleted.lock().unwrap().push(id);
            Ok(())
        }
    }

    fn repo_with_record() -> FakeRepo {
        FakeRepo {
            records: vec![
                serde_json::from_value(json!({"id": 3, "nombre": "Vehicular", "activo": true}))
                    .unwrap(),
            ],
            ..Default::default()
        }
    }

    fn user(is_admin: bool) -> User {
        User {
            id: UserId::new(1).unwrap(),
            nombre: "Operador".to_string(),
            email: None,
            is_admin,
            is_superuser: false,
            roles: vec![],
        }
    }

    fn id(value: i64) -> EntityId {
        EntityId::new(value).unwrap()
    }

    #[tokio::test]
    async fn save_without_target_creates_with_normalized_payload() {
        let repo = FakeRepo::default();
        let form = AccessTypeForm {
            nombre: " Entrada ".to_string(),
            ..Default::default()
        };

        save_record(&repo, &form, None).await.unwrap();

        assert_eq!(
            *repo.created.lock().unwrap(),
            vec![json!({"nombre": "Entrada", "descripcion": null, "activo": true})]
        );
        assert!(repo.updated.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_with_target_updates() {
        let repo = repo_with_record();
        let mut form: AccessTypeForm = load_form(&repo, id(3)).await.unwrap();
        form.activo = false;

        save_record(&repo, &form, Some(id(3))).await.unwrap();

        let updated = repo.updated.lock().unwrap();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, id(3));
        assert_eq!(updated[0].1["activo"], json!(false));
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_repository() {
        let repo = FakeRepo::default();
        let form = AccessTypeForm::default();

        let result = save_record(&repo, &form, None).await;

        match result {
            Err(ServiceError::Form(errors)) => assert!(errors.contains("nombre")),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(repo.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn load_form_of_missing_record_is_not_found() {
        let repo = repo_with_record();

        let result = load_form::<AccessTypeForm, _>(&repo, id(99)).await;

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }

    #[tokio::test]
    async fn delete_requires_manager() {
        let repo = repo_with_record();

        let result = delete_record::<AccessType, _>(&repo, &user(false), id(3)).await;
        assert!(matches!(result, Err(ServiceError::Unauthorized)));
        assert!(repo.deleted.lock().unwrap().is_empty());

        delete_record::<AccessType, _>(&repo, &user(true), id(3))
            .await
            .unwrap();
        assert_eq!(*repo.deleted.lock().unwrap(), vec![id(3)]);
    }

    #[tokio::test]
    async fn list_returns_all_records() {
        let repo = repo_with_record();

        let records: Vec<AccessType> = list_records(&repo).await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].nombre, "Vehicular");
    }
}
