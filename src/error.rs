//! Engine error handling
//!
//! The math core is infallible: off-screen points and rejected segments are
//! plain `Option`s. Errors only come from configuration and from the body
//! arena, and they are reported through this one enum.

use std::path::PathBuf;

/// Result alias used across the crate
pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to read config file {}: {error}", path.display())]
    ConfigIo {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Failed to parse config: {error}")]
    ConfigParse { error: toml::de::Error },

    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Body mass must be positive, got {mass}")]
    InvalidMass { mass: f32 },

    #[error("Body pool is full ({capacity} bodies)")]
    PoolFull { capacity: usize },

    #[error("No active body at index {index}")]
    UnknownBody { index: usize },
}

impl From<toml::de::Error> for EngineError {
    fn from(error: toml::de::Error) -> Self {
        EngineError::ConfigParse { error }
    }
}

/// Create an invalid config error
pub fn invalid_config(field: &'static str, reason: impl std::fmt::Display) -> EngineError {
    EngineError::InvalidConfig {
        field,
        reason: reason.to_string(),
    }
}
