use crate::error::AppError;
use crate::infrastructure::repositories::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum TtsServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("text too long: {0}")]
    TooLong(String),
    #[error("synthesis engine failed: {0}")]
    Engine(#[source] RepositoryError),
    #[error("voice catalog unavailable: {0}")]
    Catalog(#[source] RepositoryError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TtsServiceError {
    /// True when the request was refused before reaching the engine
    pub fn is_validation(&self) -> bool {
        matches!(self, TtsServiceError::Invalid(_) | TtsServiceError::TooLong(_))
    }
}

impl From<TtsServiceError> for AppError {
    fn from(err: TtsServiceError) -> Self {
        match err {
            TtsServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TtsServiceError::TooLong(msg) => AppError::PayloadTooLarge(msg),
            TtsServiceError::Engine(e) => {
                AppError::ExternalService(format!("Audio generation failed: {}", e))
            }
            TtsServiceError::Catalog(e) => {
                AppError::ExternalService(format!("Failed to fetch voices: {}", e))
            }
            TtsServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
