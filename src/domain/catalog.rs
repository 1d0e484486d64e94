//! Reference-data records mirrored one-to-one from backend tables.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::domain::types::{EntityId, flexible_datetime};

/// A reference-data resource served under `/{PATH}`.
pub trait Resource: Clone + Debug + DeserializeOwned + Send + Sync + 'static {
    /// Path segment of the REST resource.
    const PATH: &'static str;
    /// Human readable singular label used in dialogs and toasts.
    const LABEL: &'static str;

    fn id(&self) -> EntityId;

    /// Label shown in confirmation dialogs.
    fn display_name(&self) -> &str;

    /// Case-insensitive global table filter.
    fn matches(&self, needle: &str) -> bool;
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn optional_contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| contains_ci(h, needle))
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessType {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for AccessType {
    const PATH: &'static str = "tipos-acceso";
    const LABEL: &'static str = "Tipo de acceso";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.nombre, needle) || optional_contains(self.descripcion.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MovementType {
    pub id: EntityId,
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for MovementType {
    const PATH: &'static str = "tipos-movimiento";
    const LABEL: &'static str = "Tipo de movimiento";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.codigo, needle)
            || contains_ci(&self.nombre, needle)
            || optional_contains(self.descripcion.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContainerType {
    pub id: EntityId,
    pub codigo: String,
    pub nombre: String,
    /// Nominal load in kilograms.
    #[serde(default)]
    pub capacidad_kg: Option<f64>,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ContainerType {
    const PATH: &'static str = "tipos-contenedor";
    const LABEL: &'static str = "Tipo de contenedor";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.codigo, needle)
            || contains_ci(&self.nombre, needle)
            || optional_contains(self.descripcion.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ContractType {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    /// Retired contract types stay for history but cannot be assigned.
    #[serde(default)]
    pub cesado: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for ContractType {
    const PATH: &'static str = "tipos-contrato";
    const LABEL: &'static str = "Tipo de contrato";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.nombre, needle) || optional_contains(self.descripcion.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EntityType {
    pub id: EntityId,
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default = "default_true")]
    pub activo: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for EntityType {
    const PATH: &'static str = "tipos-entidad";
    const LABEL: &'static str = "Tipo de entidad";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.nombre, needle) || optional_contains(self.descripcion.as_deref(), needle)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub id: EntityId,
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
    pub tipo_entidad_id: EntityId,
    #[serde(default)]
    pub cesado: bool,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Resource for Location {
    const PATH: &'static str = "ubicaciones";
    const LABEL: &'static str = "Ubicación";

    fn id(&self) -> EntityId {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.nombre
    }

    fn matches(&self, needle: &str) -> bool {
        contains_ci(&self.codigo, needle)
            || contains_ci(&self.nombre, needle)
            || optional_contains(self.direccion.as_deref(), needle)
    }
}
