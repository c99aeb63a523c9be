//! Layered error types

use strewn_core::CoreError;
use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core algorithm error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// The augmentation hook reported a failure; compilation is aborted and
    /// no partial table is installed
    #[error("augmentation failed for phrase '{phrase}': {reason}")]
    AugmentFailed {
        /// Space-joined phrase handed to the hook
        phrase: String,
        /// Failure reported by the hook
        reason: String,
    },

    /// Configuration error
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
