//! Page controllers, one per catalog screen.

use crate::forms::{
    AccessTypeForm, ContainerTypeForm, ContractTypeForm, EntityTypeForm, LocationForm,
    MovementTypeForm,
};
use crate::repository::HttpRepository;

pub mod catalog;

pub use catalog::CatalogPage;

pub type AccessTypePage<G = HttpRepository> = CatalogPage<AccessTypeForm, G>;
pub type MovementTypePage<G = HttpRepository> = CatalogPage<MovementTypeForm, G>;
pub type ContainerTypePage<G = HttpRepository> = CatalogPage<ContainerTypeForm, G>;
pub type ContractTypePage<G = HttpRepository> = CatalogPage<ContractTypeForm, G>;
pub type EntityTypePage<G = HttpRepository> = CatalogPage<EntityTypeForm, G>;
pub type LocationPage<G = HttpRepository> = CatalogPage<LocationForm, G>;
