//! Configuration system for testgate.
//! TOML-based, 4-layer resolution: CLI > env > project > user > defaults.

pub mod gate_config;
pub mod testgate_config;

pub use gate_config::GateConfig;
pub use testgate_config::{CliOverrides, TestgateConfig};
