//! Page controller shared by every reference-data screen.
//!
//! Owns the fetched rows, the table filter and paging, the create/edit dialog
//! and the delete confirmation. Request failures go to the toast queue;
//! validation failures stay inline on the dialog.

use std::sync::Arc;

use crate::domain::catalog::Resource;
use crate::domain::types::EntityId;
use crate::domain::user::User;
use crate::dto::catalog::{CatalogTableView, DeleteConfirmation};
use crate::forms::{CatalogForm, FieldErrors};
use crate::pagination::paginate_slice;
use crate::repository::{CatalogReader, CatalogWriter};
use crate::services::{ServiceError, catalog as service};
use crate::widgets::progress::ProgressDialog;
use crate::widgets::toast::ToastQueue;

pub struct CatalogPage<F: CatalogForm, G> {
    repo: Arc<G>,
    toasts: ToastQueue,
    progress: ProgressDialog,
    records: Vec<F::Record>,
    loading: bool,
    filter: String,
    page: usize,
    per_page: usize,
    dialog_open: bool,
    form: F,
    editing: Option<EntityId>,
    field_errors: FieldErrors,
    pending_delete: Option<EntityId>,
}

impl<F, G> CatalogPage<F, G>
where
    F: CatalogForm,
    G: CatalogReader<F::Record> + CatalogWriter<F::Record>,
{
    pub fn new(repo: Arc<G>, toasts: ToastQueue, progress: ProgressDialog, per_page: usize) -> Self {
        Self {
            repo,
            toasts,
            progress,
            records: Vec::new(),
            loading: false,
            filter: String::new(),
            page: 1,
            per_page: per_page.max(1),
            dialog_open: false,
            form: F::default(),
            editing: None,
            field_errors: FieldErrors::default(),
            pending_delete: None,
        }
    }

    fn label() -> &'static str {
        <F::Record as Resource>::LABEL
    }

    /// Fetches all rows. Returns `false` (and toasts) when the request fails.
    pub async fn load(&mut self) -> bool {
        self.loading = true;
        let result = service::list_records::<F::Record, G>(self.repo.as_ref()).await;
        self.loading = false;

        match result {
            Ok(records) => {
                self.records = records;
                true
            }
            Err(err) => {
                log::error!("Failed to load {}: {err}", <F::Record as Resource>::PATH);
                self.toasts
                    .error(format!("Error al cargar {}", Self::label()), err.user_message());
                false
            }
        }
    }

    pub fn records(&self) -> &[F::Record] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn open_create(&mut self) {
        self.form = F::default();
        self.editing = None;
        self.field_errors = FieldErrors::default();
        self.dialog_open = true;
    }

    /// Opens the dialog prefilled with the record. Rows not in the table are fetched.
    pub async fn open_edit(&mut self, id: EntityId) -> bool {
        let form = match self.records.iter().find(|r| r.id() == id) {
            Some(record) => F::from_record(record),
            None => match service::load_form::<F, G>(self.repo.as_ref(), id).await {
                Ok(form) => form,
                Err(err) => {
                    log::error!("Failed to open {} {id}: {err}", <F::Record as Resource>::PATH);
                    self.toasts.error(Self::label(), err.user_message());
                    return false;
                }
            },
        };

        self.form = form;
        self.editing = Some(id);
        self.field_errors = FieldErrors::default();
        self.dialog_open = true;
        true
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    pub fn editing(&self) -> Option<EntityId> {
        self.editing
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Creates or updates from the dialog form. On success closes the dialog and reloads.
    pub async fn submit(&mut self) -> bool {
        if !self.dialog_open {
            return false;
        }

        let result = {
            let _progress = self.progress.show("Guardando...");
            service::save_record(self.repo.as_ref(), &self.form, self.editing).await
        };

        match result {
            Ok(_) => {
                let action = if self.editing.is_some() {
                    "actualizado"
                } else {
                    "creado"
                };
                self.close_dialog();
                self.toasts.success(
                    "Operación exitosa",
                    format!("{} {action} correctamente", Self::label()),
                );
                self.load().await;
                true
            }
            Err(ServiceError::Form(errors)) => {
                self.field_errors = errors;
                false
            }
            Err(err) => {
                log::error!("Failed to save {}: {err}", <F::Record as Resource>::PATH);
                self.toasts.error("Error al guardar", err.user_message());
                false
            }
        }
    }

    pub fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.editing = None;
        self.form = F::default();
        self.field_errors = FieldErrors::default();
    }

    pub fn can_delete(&self, user: &User) -> bool {
        user.can_manage()
    }

    /// Opens the delete confirmation. Non-managers get a warning toast instead.
    pub fn request_delete(&mut self, user: &User, id: EntityId) -> bool {
        if !self.can_delete(user) {
            self.toasts.warn(
                "Acceso denegado",
                "Solo administradores pueden eliminar registros",
            );
            return false;
        }
        self.pending_delete = Some(id);
        true
    }

    pub fn pending_delete(&self) -> Option<EntityId> {
        self.pending_delete
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Deletes the pending record and reloads. Returns whether the record was deleted.
    pub async fn confirm_delete(&mut self, user: &User) -> bool {
        let Some(id) = self.pending_delete.take() else {
            return false;
        };

        let result = {
            let _progress = self.progress.show("Eliminando...");
            service::delete_record::<F::Record, G>(self.repo.as_ref(), user, id).await
        };

        match result {
            Ok(()) => {
                self.toasts.success(
                    "Operación exitosa",
                    format!("{} eliminado correctamente", Self::label()),
                );
                self.load().await;
                true
            }
            Err(ServiceError::Unauthorized) => {
                self.toasts.warn(
                    "Acceso denegado",
                    "Solo administradores pueden eliminar registros",
                );
                false
            }
            Err(err) => {
                log::error!("Failed to delete {} {id}: {err}", <F::Record as Resource>::PATH);
                self.toasts.error("Error al eliminar", err.user_message());
                false
            }
        }
    }

    /// Global table filter; resets to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    fn filtered(&self) -> Vec<&F::Record> {
        let needle = self.filter.trim();
        self.records
            .iter()
            .filter(|r| needle.is_empty() || r.matches(needle))
            .collect()
    }

    pub fn view(&self, user: &User) -> CatalogTableView<'_, F::Record> {
        let rows = paginate_slice(&self.filtered(), self.page, self.per_page);

        let confirm_delete = self.pending_delete.map(|id| {
            let name = self
                .records
                .iter()
                .find(|r| r.id() == id)
                .map(|r| r.display_name().to_string())
                .unwrap_or_else(|| id.to_string());
            DeleteConfirmation {
                id,
                message: format!("¿Está seguro de eliminar \"{name}\"?"),
            }
        });

        CatalogTableView {
            title: Self::label(),
            rows,
            filter: &self.filter,
            loading: self.loading,
            can_delete: self.can_delete(user),
            dialog_open: self.dialog_open,
            editing: self.editing,
            field_errors: &self.field_errors,
            confirm_delete,
        }
    }
}
