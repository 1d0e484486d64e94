use thiserror::Error;

use crate::forms::FieldErrors;
use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found")]
    NotFound,

    #[error("Form validation failed")]
    Form(FieldErrors),

    #[error("Type constraint violated: {0}")]
    TypeConstraint(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Detail shown in an error toast.
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthorized => {
                "No tiene permisos para realizar esta acción".to_string()
            }
            ServiceError::NotFound => "El registro ya no existe".to_string(),
            ServiceError::Form(_) => "Revise los campos marcados".to_string(),
            ServiceError::TypeConstraint(message) => message.clone(),
            ServiceError::Repository(err) => err.user_message(),
        }
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
