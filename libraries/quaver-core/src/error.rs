/// Core error types for Quaver
use thiserror::Error;

/// Result type alias using `QuaverError`
pub type Result<T> = std::result::Result<T, QuaverError>;

/// Core error type for Quaver
#[derive(Error, Debug)]
pub enum QuaverError {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },
}

impl QuaverError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}
