//! Error types for the nav toggle

use thiserror::Error;

/// Main error type for toggle configuration and host bindings.
///
/// A missing trigger or panel is not an error: the controller simply stays
/// inert. These variants cover misconfiguration and host failures.
#[derive(Error, Debug)]
pub enum ToggleError {
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Host error: {0}")]
    Host(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigError(#[from] serde_json::Error),
}

/// Result type for toggle operations
pub type ToggleResult<T> = Result<T, ToggleError>;
