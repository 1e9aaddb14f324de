//! Gate verdict.

use serde::{Deserialize, Serialize};

/// Outcome of a gate evaluation.
///
/// `Unstable` is the degraded status a CI host records against the build.
/// `Pass` records nothing; the build keeps its default success status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Unstable,
}

impl Verdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Unstable => write!(f, "unstable"),
        }
    }
}
