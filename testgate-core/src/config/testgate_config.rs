//! Top-level testgate configuration with 4-layer resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::GateConfig;
use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`TESTGATE_*`)
/// 3. Project config (`testgate.toml` in project root)
/// 4. User config (`~/.testgate/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TestgateConfig {
    pub gate: GateConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub gate_percentage: Option<f64>,
    pub gate_minimum_amount: Option<u32>,
}

impl TestgateConfig {
    /// Load configuration with 4-layer resolution.
    pub fn load(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        // Non-parse errors from user config are warnings,
                        // not fatal. Continue with defaults.
                        tracing::warn!(
                            error = %e,
                            "Skipping unreadable user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("testgate.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &TestgateConfig) -> Result<(), ConfigError> {
        if let Some(percentage) = config.gate.percentage {
            if !percentage.is_finite() || percentage < 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "gate.percentage".to_string(),
                    message: "must be a finite, non-negative percentage".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.testgate/config.toml`.
    fn user_config_path() -> Option<std::path::PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut TestgateConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| {
            ConfigError::FileNotFound {
                path: path.display().to_string(),
            }
        })?;

        let file_config: TestgateConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base`
    /// values only when `other` has a `Some` value.
    fn merge(base: &mut TestgateConfig, other: &TestgateConfig) {
        if other.gate.percentage.is_some() {
            base.gate.percentage = other.gate.percentage;
        }
        if other.gate.minimum_amount.is_some() {
            base.gate.minimum_amount = other.gate.minimum_amount;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `TESTGATE_GATE_PERCENTAGE`, `TESTGATE_GATE_MINIMUM_AMOUNT`.
    fn apply_env_overrides(config: &mut TestgateConfig) {
        if let Ok(val) = std::env::var("TESTGATE_GATE_PERCENTAGE") {
            if let Ok(v) = val.parse::<f64>() {
                config.gate.percentage = Some(v);
            }
        }
        if let Ok(val) = std::env::var("TESTGATE_GATE_MINIMUM_AMOUNT") {
            if let Ok(v) = val.parse::<u32>() {
                config.gate.minimum_amount = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut TestgateConfig, cli: &CliOverrides) {
        if let Some(v) = cli.gate_percentage {
            config.gate.percentage = Some(v);
        }
        if let Some(v) = cli.gate_minimum_amount {
            config.gate.minimum_amount = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level testgate config directory: `~/.testgate/`.
fn dirs_path() -> Option<std::path::PathBuf> {
    home_dir().map(|h| h.join(".testgate"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<std::path::PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(std::path::PathBuf::from)
}
