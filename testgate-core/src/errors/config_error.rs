//! Configuration errors.

/// Errors raised by the layered configuration loader.
///
/// Gate evaluation itself never raises: a threshold string that fails to
/// parse at step-construction time degrades the gate to a logged no-op
/// instead of propagating.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Invalid value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
