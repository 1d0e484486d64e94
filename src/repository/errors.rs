use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Request error: {0}")]
    Request(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Message suitable for a toast detail.
    pub fn user_message(&self) -> String {
        match self {
            RepositoryError::NotFound => "El registro ya no existe".to_string(),
            RepositoryError::Network(_) => "No se pudo conectar con el servidor".to_string(),
            RepositoryError::Status { message, .. } => message.clone(),
            RepositoryError::Decode(_) => "Respuesta inesperada del servidor".to_string(),
            RepositoryError::Request(message) => message.clone(),
        }
    }
}

impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if err.is_builder() {
            RepositoryError::Request(err.to_string())
        } else if let Some(status) = err.status() {
            if status == StatusCode::NOT_FOUND {
                RepositoryError::NotFound
            } else {
                RepositoryError::Status {
                    status: status.as_u16(),
                    message: status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string(),
                }
            }
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}
