//! Error types for the Trace Operator
//!
//! Resolution of a Jaeger instance never fails; these errors only come from
//! the edges around it: loading operator configuration, reading manifests,
//! and rendering output.

use thiserror::Error;

/// Unified error type for the operator
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid manifest {path}: {reason}")]
    InvalidManifest { path: String, reason: String },

    // =========================================================================
    // Serialization Errors
    // =========================================================================
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if this error was caused by user-supplied input rather than the environment
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Configuration(_)
                | Error::InvalidManifest { .. }
                | Error::Yaml(_)
        )
    }
}

/// Result type alias for the operator
pub type Result<T> = std::result::Result<T, Error>;
