//! Error conversion glue between the `data` layer and the service layer.
//!
//! Forms and value objects must not depend on service error types, so the
//! conversions live here and are compiled only with the `client` feature.

use crate::domain::types::TypeConstraintError;
use crate::forms::{FieldErrors, FormError};
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        ServiceError::Form(FieldErrors::from(&val))
    }
}
