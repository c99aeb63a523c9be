//! Engine configuration

use crate::error::{EngineError, Result};

/// Engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Maximum allowed token distance between the first and any later
    /// matched position of one occurrence; `None` means unbounded
    pub max_space: Option<usize>,
    /// Number of threads for compile-time normalization (None = auto)
    pub threads: Option<usize>,
}

impl EngineConfig {
    /// Create a configuration with the given window bound
    pub fn with_max_space(max_space: usize) -> Self {
        Self {
            max_space: Some(max_space),
            ..Default::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_space == Some(0) {
            return Err(EngineError::Config(
                "max_space must be positive".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(EngineError::Config("threads must be positive".to_string()));
        }
        Ok(())
    }

    /// Resolve the effective normalization fan-out
    pub fn effective_threads(&self) -> usize {
        match self.threads {
            Some(threads) => threads,
            #[cfg(feature = "parallel")]
            None => num_cpus::get(),
            #[cfg(not(feature = "parallel"))]
            None => 1,
        }
    }
}
