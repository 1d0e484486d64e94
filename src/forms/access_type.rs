//! Form for access types (`tipos-acceso`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank};
use crate::domain::catalog::AccessType;
use crate::domain::types::{EntityName, normalize_optional_text};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct AccessTypeForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "Máximo 50 caracteres")
    )]
    pub nombre: String,
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub descripcion: String,
    pub activo: bool,
}

impl Default for AccessTypeForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            activo: true,
        }
    }
}

/// Body sent to `POST /tipos-acceso` and `PUT /tipos-acceso/{id}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AccessTypePayload {
    pub nombre: EntityName,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl AccessTypeForm {
    fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for AccessTypeForm {
    type Record = AccessType;
    type Payload = AccessTypePayload;

    fn from_record(record: &AccessType) -> Self {
        Self {
            nombre: record.nombre.clone(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            activo: record.activo,
        }
    }

    fn to_payload(&self) -> Result<AccessTypePayload, FormError> {
        // Length limits apply to what is sent, not to the padding.
        self.trimmed().validate()?;

        Ok(AccessTypePayload {
            nombre: EntityName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            descripcion: normalize_optional_text(&self.descripcion),
            activo: self.activo,
        })
    }
}
