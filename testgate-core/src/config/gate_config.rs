//! Quality-gate threshold configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the test-reduction gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GateConfig {
    /// Allowed drop in the effective test count, as a percentage of the
    /// previous build's count. Default: 100.0 (any drop tolerated).
    pub percentage: Option<f64>,
    /// Absolute floor for the effective test count. Default: 0.
    pub minimum_amount: Option<u32>,
}

impl GateConfig {
    /// Returns the effective percentage threshold, defaulting to 100.0.
    pub fn effective_percentage(&self) -> f64 {
        self.percentage.unwrap_or(100.0)
    }

    /// Returns the effective minimum amount, defaulting to 0.
    pub fn effective_minimum_amount(&self) -> u32 {
        self.minimum_amount.unwrap_or(0)
    }
}
