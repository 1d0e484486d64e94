//! Form for entity types (`tipos-entidad`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank};
use crate::domain::catalog::EntityType;
use crate::domain::types::{UpperName, normalize_optional_text};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct EntityTypeForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 50, message = "Máximo 50 caracteres")
    )]
    pub nombre: String,
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub descripcion: String,
    pub activo: bool,
}

impl Default for EntityTypeForm {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            descripcion: String::new(),
            activo: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntityTypePayload {
    /// Stored uppercase so lookups by name are case-stable.
    pub nombre: UpperName,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl EntityTypeForm {
    fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for EntityTypeForm {
    type Record = EntityType;
    type Payload = EntityTypePayload;

    fn from_record(record: &EntityType) -> Self {
        Self {
            nombre: record.nombre.clone(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            activo: record.activo,
        }
    }

    fn to_payload(&self) -> Result<EntityTypePayload, FormError> {
        self.trimmed().validate()?;

        Ok(EntityTypePayload {
            nombre: UpperName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            descripcion: normalize_optional_text(&self.descripcion),
            activo: self.activo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_uppercased() {
        let form = EntityTypeForm {
            nombre: " armador ".to_string(),
            ..Default::default()
        };

        let payload = form.to_payload().unwrap();

        assert_eq!(payload.nombre.as_str(), "ARMADOR");
        assert_eq!(payload.descripcion, None);
        assert!(payload.activo);
    }
}
