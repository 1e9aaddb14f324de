//! Gate trait, input, and result types.

use serde::{Deserialize, Serialize};

use testgate_core::types::{TestSnapshot, Verdict};

/// Snapshots supplied by the build-history collaborator for one
/// evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GateInput {
    /// `None` when the current build carries no test-result data.
    pub current: Option<TestSnapshot>,
    /// `None` when no previous built build exists, or when one exists
    /// without test-result data.
    pub previous: Option<TestSnapshot>,
}

/// Verdict plus the ordered audit trail explaining it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateResult {
    pub verdict: Verdict,
    pub log: Vec<String>,
}

impl GateResult {
    pub fn pass(log: Vec<String>) -> Self {
        Self {
            verdict: Verdict::Pass,
            log,
        }
    }

    pub fn unstable(log: Vec<String>) -> Self {
        Self {
            verdict: Verdict::Unstable,
            log,
        }
    }

    pub fn passed(&self) -> bool {
        self.verdict.is_pass()
    }
}

/// A quality gate evaluated against one build.
pub trait QualityGate {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn evaluate(&self, input: &GateInput) -> GateResult;
}
