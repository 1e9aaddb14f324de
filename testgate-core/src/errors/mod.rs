//! Error handling for testgate.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;

pub use config_error::ConfigError;
