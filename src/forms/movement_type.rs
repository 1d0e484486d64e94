//! Form for movement types (`tipos-movimiento`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank};
use crate::domain::catalog::MovementType;
use crate::domain::types::{Code, EntityName, normalize_optional_text};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct MovementTypeForm {
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
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub descripcion: String,
    pub activo: bool,
}

impl Default for MovementTypeForm {
    fn default() -> Self {
        Self {
            codigo: String::new(),
            nombre: String::new(),
            descripcion: String::new(),
            activo: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MovementTypePayload {
    pub codigo: Code,
    pub nombre: EntityName,
    pub descripcion: Option<String>,
    pub activo: bool,
}

impl MovementTypeForm {
    fn trimmed(&self) -> Self {
        Self {
            codigo: self.codigo.trim().to_string(),
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for MovementTypeForm {
    type Record = MovementType;
    type Payload = MovementTypePayload;

    fn from_record(record: &MovementType) -> Self {
        Self {
            codigo: record.codigo.clone(),
            nombre: record.nombre.clone(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            activo: record.activo,
        }
    }

    fn to_payload(&self) -> Result<MovementTypePayload, FormError> {
        self.trimmed().validate()?;

        Ok(MovementTypePayload {
            codigo: Code::new(self.codigo.as_str()).map_err(FormError::field("codigo"))?,
            nombre: EntityName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            descripcion: normalize_optional_text(&self.descripcion),
            activo: self.activo,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::forms::FieldErrors;

    #[test]
    fn code_is_uppercased_and_payload_whitelisted() {
        let form = MovementTypeForm {
            codigo: " ing ".to_string(),
            nombre: "Ingreso a cámara".to_string(),
            descripcion: " ".to_string(),
            activo: true,
        };

        let payload = form.to_payload().unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "codigo": "ING",
                "nombre": "Ingreso a cámara",
                "descripcion": null,
                "activo": true
            })
        );
    }

    #[test]
    fn code_length_is_limited() {
        let form = MovementTypeForm {
            codigo: "TRASLADO-INTERNO".to_string(),
            nombre: "Traslado".to_string(),
            ..Default::default()
        };

        let errors = FieldErrors::from(&form.to_payload().unwrap_err());

        assert_eq!(errors.get("codigo"), ["Máximo 10 caracteres".to_string()]);
        assert!(!errors.contains("nombre"));
    }
}
