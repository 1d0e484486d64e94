//! Form for locations (`ubicaciones`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank, required_id};
use crate::domain::catalog::Location;
use crate::domain::types::{Code, EntityId, EntityName, normalize_optional_text};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct LocationForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 20, message = "Máximo 20 caracteres")
    )]
    pub codigo: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Máximo 100 caracteres")
    )]
    pub nombre: String,
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub direccion: String,
    /// Value of the entity-type select, as a string.
    #[validate(custom(function = "required_id"))]
    pub tipo_entidad_id: String,
    pub cesado: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LocationPayload {
    pub codigo: Code,
    pub nombre: EntityName,
    pub direccion: Option<String>,
    pub tipo_entidad_id: EntityId,
    pub cesado: bool,
}

impl LocationForm {
    fn trimmed(&self) -> Self {
        Self {
            codigo: self.codigo.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            direccion: self.direccion.trim().to_string(),
            tipo_entidad_id: self.tipo_entidad_id.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for LocationForm {
    type Record = Location;
    type Payload = LocationPayload;

    fn from_record(record: &Location) -> Self {
        Self {
            codigo: record.codigo.clone(),
            nombre: record.nombre.clone(),
            direccion: record.direccion.clone().unwrap_or_default(),
            tipo_entidad_id: record.tipo_entidad_id.to_string(),
            cesado: record.cesado,
        }
    }

    fn to_payload(&self) -> Result<LocationPayload, FormError> {
        self.trimmed().validate()?;

        Ok(LocationPayload {
            codigo: Code::new(self.codigo.as_str()).map_err(FormError::field("codigo"))?,
            nombre: EntityName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            direccion: normalize_optional_text(&self.direccion),
            tipo_entidad_id: self
                .tipo_entidad_id
                .parse::<EntityId>()
                .map_err(FormError::field("tipo_entidad_id"))?,
            cesado: self.cesado,
        })
    }
}
