//! Test-reduction gate — degrades a build whose test count dropped too far.

use testgate_core::config::GateConfig;

use super::types::{GateInput, GateResult, QualityGate};

/// Thresholds for [`ReductionGate`], fixed when the pipeline step is
/// configured.
///
/// Parse failure is absorbed into a sticky `configuration_error` flag
/// rather than an error value: a misconfigured step must never block a
/// build, so evaluation degrades to a logged no-op pass for the lifetime
/// of this config.
#[derive(Debug, Clone, PartialEq)]
pub struct ReductionConfig {
    percentage: f64,
    minimum_amount: u32,
    configuration_error: bool,
}

impl ReductionConfig {
    /// Construct from already-parsed thresholds.
    pub fn new(percentage: f64, minimum_amount: u32) -> Self {
        Self {
            percentage,
            minimum_amount,
            configuration_error: false,
        }
    }

    /// Construct from the raw string values of a configuration form.
    ///
    /// Falls back to the defaults (100.0 / 0) and sets the sticky flag
    /// when either value fails numeric parsing.
    pub fn from_strings(percentage: &str, minimum_amount: &str) -> Self {
        match (percentage.parse::<f64>(), minimum_amount.parse::<u32>()) {
            (Ok(percentage), Ok(minimum_amount)) => Self::new(percentage, minimum_amount),
            _ => Self {
                percentage: 100.0,
                minimum_amount: 0,
                configuration_error: true,
            },
        }
    }

    /// Construct from the resolved layered configuration.
    pub fn from_gate_config(config: &GateConfig) -> Self {
        Self::new(
            config.effective_percentage(),
            config.effective_minimum_amount(),
        )
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn minimum_amount(&self) -> u32 {
        self.minimum_amount
    }

    /// True when construction-time parsing failed. Set once, never
    /// revisited.
    pub fn is_configuration_error(&self) -> bool {
        self.configuration_error
    }
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self::new(100.0, 0)
    }
}

/// Compares a build's effective test count (total minus skipped) against
/// the previous built build and against an absolute floor.
pub struct ReductionGate {
    config: ReductionConfig,
}

impl ReductionGate {
    pub fn new(config: ReductionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReductionConfig {
        &self.config
    }
}

impl QualityGate for ReductionGate {
    fn name(&self) -> &'static str {
        "Test Reduction"
    }

    fn description(&self) -> &'static str {
        "Verifies that the amount of executed tests did not drop below the configured thresholds"
    }

    fn evaluate(&self, input: &GateInput) -> GateResult {
        let mut log = Vec::new();

        if self.config.is_configuration_error() {
            log.push("Not configured correctly, skipping".to_string());
            return GateResult::pass(log);
        }

        log.push("Verifying amount of unit tests.".to_string());
        // Debug formatting keeps the trailing `.0` on whole percentages.
        log.push(format!("percentage: {:?}", self.config.percentage));
        log.push(format!("minimum amount: {}", self.config.minimum_amount));

        let current = match input.current {
            Some(snapshot) => snapshot,
            None => {
                log.push("No Test Results in current build".to_string());
                return GateResult::unstable(log);
            }
        };

        let current_effective = current.effective();
        log.push(format!("Current amount of tests: {current_effective}"));

        if let Some(previous) = input.previous {
            let previous_effective = previous.effective();
            log.push(format!("Previous amount of tests: {previous_effective}"));
            log.push("Comparing with percentage".to_string());
            // The floor stays floating-point; the comparison is never
            // truncated to an integer.
            let floor = previous_effective as f64
                - (previous_effective as f64 * self.config.percentage) / 100.0;
            if (current_effective as f64) < floor {
                log.push("Amount of tests reduced too much".to_string());
                return GateResult::unstable(log);
            }
        }

        // Not an else-branch: the minimum check runs even when a previous
        // build was compared above, and so does its log line.
        log.push("No previous successful build found, comparing with minimum amount".to_string());
        if current_effective < i64::from(self.config.minimum_amount) {
            log.push("Not enough unit tests".to_string());
            return GateResult::unstable(log);
        }

        GateResult::pass(log)
    }
}
