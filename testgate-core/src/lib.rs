//! # testgate-core
//!
//! Core types, collaborator traits, errors, configuration, and tracing
//! setup for the testgate quality-gate engine.

pub mod config;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;
