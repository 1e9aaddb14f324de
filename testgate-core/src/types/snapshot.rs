//! Per-build test-count snapshot.

use serde::{Deserialize, Serialize};

/// Total and skipped test counts reported for one build.
///
/// Supplied fresh per evaluation by the build-history collaborator; the
/// engine never stores or mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSnapshot {
    pub total: u32,
    pub skipped: u32,
}

impl TestSnapshot {
    pub fn new(total: u32, skipped: u32) -> Self {
        Self { total, skipped }
    }

    /// Tests that actually ran. Signed, so a snapshot reporting more skips
    /// than totals yields a deficit instead of wrapping.
    pub fn effective(&self) -> i64 {
        i64::from(self.total) - i64::from(self.skipped)
    }
}
