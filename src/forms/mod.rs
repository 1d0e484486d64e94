//! Form definitions backing the catalog dialogs.
//!
//! Forms hold raw controlled-input values exactly as the user typed them. A
//! form is turned into a whitelisted payload by [`CatalogForm::to_payload`],
//! which validates first and then normalizes every field.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::Serialize;
use thiserror::Error;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::catalog::Resource;
use crate::domain::types::{EntityId, TypeConstraintError};

pub mod access_type;
pub mod container_type;
pub mod contract_type;
pub mod entity_type;
pub mod location;
pub mod movement_type;

pub use access_type::{AccessTypeForm, AccessTypePayload};
pub use container_type::{ContainerTypeForm, ContainerTypePayload};
pub use contract_type::{ContractTypeForm, ContractTypePayload};
pub use entity_type::{EntityTypeForm, EntityTypePayload};
pub use location::{LocationForm, LocationPayload};
pub use movement_type::{MovementTypeForm, MovementTypePayload};

/// Upper bound accepted for container capacities, in kilograms.
pub const MAX_CAPACITY_KG: f64 = 100_000.0;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid value for {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: TypeConstraintError,
    },

    #[error("invalid number for {0}")]
    InvalidNumber(&'static str),
}

impl FormError {
    pub(crate) fn field(field: &'static str) -> impl FnOnce(TypeConstraintError) -> Self {
        move |source| FormError::InvalidField { field, source }
    }
}

/// Inline validation messages keyed by form field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages for a single field, empty when the field is valid.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut result = FieldErrors::default();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                result.insert(field.to_string(), message);
            }
        }
        result
    }
}

impl From<&FormError> for FieldErrors {
    fn from(error: &FormError) -> Self {
        match error {
            FormError::Validation(errors) => errors.into(),
            FormError::InvalidField { field, .. } | FormError::InvalidNumber(field) => {
                let mut result = FieldErrors::default();
                result.insert(*field, "Valor inválido");
                result
            }
        }
    }
}

/// A dialog form bound to one catalog resource.
pub trait CatalogForm: Validate + Default + Clone + Debug + Send + Sync + 'static {
    type Record: Resource;
    /// Whitelisted body sent on create and update.
    type Payload: Serialize + Debug + Send + Sync;

    /// Prefills the form for editing an existing record.
    fn from_record(record: &Self::Record) -> Self;

    /// Validates and normalizes the form into the request body.
    fn to_payload(&self) -> Result<Self::Payload, FormError>;
}

fn validation_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

/// Rejects values that are empty after trimming.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(validation_error("required", "Campo obligatorio"))
    } else {
        Ok(())
    }
}

/// Requires a positive numeric identifier (select inputs yield strings).
pub(crate) fn required_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("required", "Seleccione una opción"));
    }
    value
        .parse::<EntityId>()
        .map(|_| ())
        .map_err(|_| validation_error("invalid_id", "Selección inválida"))
}

/// Parses a decimal typed with either `.` or `,` as separator.
pub(crate) fn parse_decimal(value: &str) -> Option<f64> {
    value.trim().replace(',', ".").parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Optional capacity: blank is allowed, otherwise `0 < value <= MAX_CAPACITY_KG`.
pub(crate) fn optional_capacity(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    match parse_decimal(value) {
        Some(v) if v > 0.0 && v <= MAX_CAPACITY_KG => Ok(()),
        Some(_) => Err(validation_error(
            "range",
            "La capacidad debe ser mayor que 0 y no superar 100000 kg",
        )),
        None => Err(validation_error("number", "Ingrese un número válido")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_accepts_decimal_comma_and_blank() {
        assert!(optional_capacity("").is_ok());
        assert!(optional_capacity("1250,5").is_ok());
        assert_eq!(parse_decimal("1250,5"), Some(1250.5));
    }

    #[test]
    fn capacity_enforces_range() {
        assert!(optional_capacity("0").is_err());
        assert!(optional_capacity("100000").is_ok());
        assert!(optional_capacity("100000.1").is_err());
        assert!(optional_capacity("mucho").is_err());
    }

    #[test]
    fn required_id_rejects_blank_and_text() {
        assert!(required_id("").is_err());
        assert!(required_id("abc").is_err());
        assert!(required_id("0").is_err());
        assert!(required_id("4").is_ok());
    }

    #[test]
    fn field_errors_collect_messages() {
        let mut errors = FieldErrors::default();
        errors.insert("nombre", "Campo obligatorio");
        errors.insert("nombre", "Máximo 50 caracteres");

        assert_eq!(errors.get("nombre").len(), 2);
        assert!(errors.get("codigo").is_empty());
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["nombre"]);
    }
}
