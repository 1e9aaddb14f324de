//! Build-outcome recording capability.

use crate::types::Verdict;

/// Records the gate's output against the build: console lines and, when
/// the gate degrades the build, the final status.
pub trait BuildListener {
    /// Append one line to the build's persisted console output, in call
    /// order.
    fn log(&self, line: &str);

    /// Set the build's final status. Only ever invoked with
    /// [`Verdict::Unstable`]; an untouched build keeps its default success
    /// status.
    fn record_verdict(&self, verdict: Verdict);
}
