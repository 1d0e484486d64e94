//! Form for contract types (`tipos-contrato`).

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{CatalogForm, FormError, not_blank};
use crate::domain::catalog::ContractType;
use crate::domain::types::{EntityName, normalize_optional_text};

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct ContractTypeForm {
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Máximo 100 caracteres")
    )]
    pub nombre: String,
    #[validate(length(max = 255, message = "Máximo 255 caracteres"))]
    pub descripcion: String,
    pub cesado: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContractTypePayload {
    pub nombre: EntityName,
    pub descripcion: Option<String>,
    pub cesado: bool,
}

impl ContractTypeForm {
    fn trimmed(&self) -> Self {
        Self {
            nombre: self.nombre.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            ..self.clone()
        }
    }
}

impl CatalogForm for ContractTypeForm {
    type Record = ContractType;
    type Payload = ContractTypePayload;

    fn from_record(record: &ContractType) -> Self {
        Self {
            nombre: record.nombre.clone(),
            descripcion: record.descripcion.clone().unwrap_or_default(),
            cesado: record.cesado,
        }
    }

    fn to_payload(&self) -> Result<ContractTypePayload, FormError> {
        self.trimmed().validate()?;

        Ok(ContractTypePayload {
            nombre: EntityName::new(self.nombre.as_str()).map_err(FormError::field("nombre"))?,
            descripcion: normalize_optional_text(&self.descripcion),
            cesado: self.cesado,
        })
    }
}
