//! Form for container types (`tipos-contenedor`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank, optional_capacity, parse_decimal};
use crate::domain::catalog::ContainerType;
use crate::domain::types::{Code, EntityName, normalize_optional_text};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct ContainerTypeForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 10, message = "Máximo 10 caracteres")
    )]
    pub codigo: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Máximo 100 caracteres")
    )]
    pub nombre: String,
    /// Raw numeric input; blank means "not informed".
    #[validate(custom(function = "optional_capacity"))]
    pub capacidad_kg: String,
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub descripcion: String,
    pub activo: bool,
}

impl Default for ContainerTypeForm {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            capacidad_kg: String::new(),
            descripcion: String::new(),
            activo: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContainerTypePayload {
    pub codigo: Code,
    pub nombre: EntityName,
    pub capacidad_kg: Option<f64>,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl ContainerTypeForm {
    fn trimmed(&self) -> Self {
        Self {
            codigo: self.codigo.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            capacidad_kg: self.capacidad_kg.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for ContainerTypeForm {
    type Record = ContainerType;
    type Payload = ContainerTypePayload;

    fn from_record(record: &ContainerType) -> Self {
        Self {
            codigo: record.codigo.clone(),
            nombre: record.nombre.clone(),
            capacidad_kg: record
                .capacidad_kg
                .map(|v| v.to_string())
                .unwrap_or_default(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            activo: record.activo,
        }
    }

    fn to_payload(&self) -> Result<ContainerTypePayload, FormError> {
        self.trimmed().validate()?;

        let capacidad_kg = if self.capacidad_kg.trim().is_empty() {
            None
        } else {
            Some(parse_decimal(&self.capacidad_kg).ok_or(FormError::InvalidNumber("capacidad_kg"))?)
        };

        Ok(ContainerTypePayload {
            codigo: Code::new(self.codigo.as_str()).map_err(FormError::field("codigo"))?,
            nombre: EntityName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            capacidad_kg,
            descripcion: normalize_optional_text(&self.descripcion),
            activo: self.activo,
        })
    }
}
