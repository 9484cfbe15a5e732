use thiserror::Error;

pub type Result<T> = std::result::Result<T, EduFindError>;

#[derive(Error, Debug)]
pub enum EduFindError {
    #[error("Search provider credential is not configured (set SERPER_API_KEY)")]
    MissingCredential,

    #[error("Search provider unavailable: {0}")]
    Provider(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EduFindError {
    /// Client-side mistakes, as opposed to failures of this service or its provider.
    pub fn is_client_error(&self) -> bool {
        matches!(self, EduFindError::Validation(_))
    }
}
