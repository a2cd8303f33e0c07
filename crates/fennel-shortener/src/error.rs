use fennel_core::StoreError;
use thiserror::Error;

/// Result type for shortener operations.
pub type Result<T> = std::result::Result<T, ShortenError>;

#[derive(Debug, Clone, Error)]
pub enum ShortenError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("no mapping for short id: {0}")]
    NotFound(String),
    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for ShortenError {
    fn from(value: StoreError) -> Self {
        Self::Store(value.to_string())
    }
}
