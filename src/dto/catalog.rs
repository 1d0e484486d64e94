use serde::Serialize;

use crate::domain::types::EntityId;
use crate::forms::FieldErrors;
use crate::pagination::Paginated;

/// Data required to render one catalog page.
#[derive(Debug, Serialize)]
pub struct CatalogTableView<'a, R> {
    /// Singular label of the resource, used in headers and dialogs.
    pub title: &'static str,
    /// Current page of filtered rows.
    pub rows: Paginated<&'a R>,
    /// Global filter echoed back to the search box.
    pub filter: &'a str,
    /// Whether the list request is in flight.
    pub loading: bool,
    /// Whether delete icons are shown for the current user.
    pub can_delete: bool,
    /// Whether the create/edit dialog is open.
    pub dialog_open: bool,
    /// Record being edited; `None` while creating.
    pub editing: Option<EntityId>,
    /// Inline messages for the open dialog.
    pub field_errors: &'a FieldErrors,
    /// Pending delete confirmation, if any.
    pub confirm_delete: Option<DeleteConfirmation>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub id: EntityId,
    /// Question shown in the confirmation dialog.
    pub message: String,
}
