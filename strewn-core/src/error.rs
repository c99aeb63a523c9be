//! Core error types

use thiserror::Error;

/// Errors raised by the matching core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A pattern with no tokens was registered
    #[error("pattern for label '{label}' has no tokens")]
    EmptyPattern {
        /// Label the empty pattern was registered under
        label: String,
    },

    /// The window bound must cover at least one token of distance
    #[error("max_space must be positive")]
    InvalidMaxSpace,

    /// A partial match was extended with a non-increasing position
    ///
    /// This signals a broken engine invariant, not a recoverable input
    /// condition.
    #[error("non-monotonic extension of pattern {pattern} at position {position}")]
    NonMonotonic {
        /// Pattern whose partial match broke the invariant
        pattern: usize,
        /// Offending token position
        position: usize,
    },

    /// A pattern id outside the table was referenced
    #[error("unknown pattern id {0}")]
    UnknownPattern(usize),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
