//! API error types

use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine layer error
    #[error("engine error: {0}")]
    Engine(#[from] strewn_engine::EngineError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid document construction
    #[error("invalid document: {0}")]
    Document(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
