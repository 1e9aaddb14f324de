//! Enforcement runner — wires a gate to its build-system collaborators.

use testgate_core::traits::{BuildHistory, BuildListener};
use testgate_core::types::Verdict;

use crate::gates::{GateInput, GateResult, QualityGate};

/// Evaluate `gate` against the snapshots supplied by `history`, streaming
/// the audit trail to `listener` in order.
///
/// The build status is only recorded when the gate degrades the build; a
/// passing build keeps its default status untouched.
pub fn enforce<G, H, L>(gate: &G, history: &H, listener: &L) -> GateResult
where
    G: QualityGate + ?Sized,
    H: BuildHistory + ?Sized,
    L: BuildListener + ?Sized,
{
    let input = GateInput {
        current: history.current_snapshot(),
        previous: history.previous_built_snapshot(),
    };

    let result = gate.evaluate(&input);

    for line in &result.log {
        listener.log(line);
    }

    match result.verdict {
        Verdict::Unstable => {
            tracing::warn!(
                gate = gate.name(),
                verdict = %result.verdict,
                "Build marked unstable"
            );
            listener.record_verdict(Verdict::Unstable);
        }
        Verdict::Pass => {
            tracing::debug!(
                gate = gate.name(),
                verdict = %result.verdict,
                "Gate passed"
            );
        }
    }

    result
}
