//! Tests for the enforcement runner and its collaborator wiring.

use std::cell::{Cell, RefCell};

use testgate_core::traits::{BuildHistory, BuildListener};
use testgate_core::types::{TestSnapshot, Verdict};
use testgate_enforcement::gates::{ReductionConfig, ReductionGate};
use testgate_enforcement::runner::enforce;

/// In-memory build history standing in for the CI host.
struct FakeHistory {
    current: Option<TestSnapshot>,
    previous: Option<TestSnapshot>,
}

impl BuildHistory for FakeHistory {
    fn current_snapshot(&self) -> Option<TestSnapshot> {
        self.current
    }

    fn previous_built_snapshot(&self) -> Option<TestSnapshot> {
        self.previous
    }
}

/// Records everything the runner reports.
#[derive(Default)]
struct FakeListener {
    lines: RefCell<Vec<String>>,
    recorded: Cell<Option<Verdict>>,
}

impl BuildListener for FakeListener {
    fn log(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }

    fn record_verdict(&self, verdict: Verdict) {
        self.recorded.set(Some(verdict));
    }
}

fn gate(percentage: &str, minimum_amount: &str) -> ReductionGate {
    ReductionGate::new(ReductionConfig::from_strings(percentage, minimum_amount))
}

/// The audit trail reaches the listener in evaluation order.
#[test]
fn test_log_lines_forwarded_in_order() {
    let gate = gate("10", "10");
    let history = FakeHistory {
        current: Some(TestSnapshot::new(9, 0)),
        previous: None,
    };
    let listener = FakeListener::default();

    let result = enforce(&gate, &history, &listener);

    assert_eq!(*listener.lines.borrow(), result.log);
    assert_eq!(
        *listener.lines.borrow(),
        [
            "Verifying amount of unit tests.",
            "percentage: 10.0",
            "minimum amount: 10",
            "Current amount of tests: 9",
            "No previous successful build found, comparing with minimum amount",
            "Not enough unit tests",
        ]
    );
}

/// An unstable verdict is recorded against the build.
#[test]
fn test_unstable_verdict_recorded() {
    let gate = gate("10", "10");
    let history = FakeHistory {
        current: None,
        previous: None,
    };
    let listener = FakeListener::default();

    let result = enforce(&gate, &history, &listener);

    assert_eq!(result.verdict, Verdict::Unstable);
    assert_eq!(listener.recorded.get(), Some(Verdict::Unstable));
}

/// A passing build is never explicitly recorded; its default status
/// stands.
#[test]
fn test_pass_records_nothing() {
    let gate = gate("10", "0");
    let history = FakeHistory {
        current: Some(TestSnapshot::new(100, 0)),
        previous: Some(TestSnapshot::new(100, 0)),
    };
    let listener = FakeListener::default();

    let result = enforce(&gate, &history, &listener);

    assert_eq!(result.verdict, Verdict::Pass);
    assert_eq!(listener.recorded.get(), None);
}

/// A misconfigured gate logs its single line and records nothing.
#[test]
fn test_misconfigured_gate_records_nothing() {
    let gate = gate("abc", "10");
    let history = FakeHistory {
        current: None,
        previous: None,
    };
    let listener = FakeListener::default();

    let result = enforce(&gate, &history, &listener);

    assert_eq!(result.verdict, Verdict::Pass);
    assert_eq!(
        *listener.lines.borrow(),
        ["Not configured correctly, skipping"]
    );
    assert_eq!(listener.recorded.get(), None);
}
