//! Build-history lookup capability.

use crate::types::TestSnapshot;

/// Supplies the test-count snapshots for the build under evaluation and
/// for the previous built build.
///
/// How build history is persisted and how a "previous build" is located is
/// entirely the host's concern; the engine only consumes the snapshots.
pub trait BuildHistory {
    /// Snapshot of the current build, or `None` when it carries no
    /// test-result data.
    fn current_snapshot(&self) -> Option<TestSnapshot>;

    /// Snapshot of the previous built build. `None` both when no previous
    /// build exists and when one exists without test-result data.
    fn previous_built_snapshot(&self) -> Option<TestSnapshot>;
}
