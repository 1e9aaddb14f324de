//! Property tests for the reduction policy.

use proptest::prelude::*;

use testgate_core::types::TestSnapshot;
use testgate_enforcement::gates::{GateInput, QualityGate, ReductionConfig, ReductionGate};

proptest! {
    /// Evaluation is a pure function: identical inputs always produce the
    /// identical verdict and audit trail.
    #[test]
    fn evaluation_is_deterministic(
        percentage in 0.0f64..200.0,
        minimum in 0u32..1000,
        total in 0u32..10_000,
        skipped in 0u32..10_000,
        prev_total in proptest::option::of(0u32..10_000),
    ) {
        let gate = ReductionGate::new(ReductionConfig::new(percentage, minimum));
        let input = GateInput {
            current: Some(TestSnapshot::new(total, skipped)),
            previous: prev_total.map(|t| TestSnapshot::new(t, 0)),
        };

        prop_assert_eq!(gate.evaluate(&input), gate.evaluate(&input));
    }

    /// Only the effective count matters: snapshots with equal
    /// total-minus-skipped are indistinguishable in every check.
    #[test]
    fn skip_subtraction_equivalence(
        percentage in 0.0f64..200.0,
        minimum in 0u32..1000,
        effective in 0u32..5_000,
        pad in 0u32..5_000,
        prev_effective in 0u32..5_000,
        prev_pad in 0u32..5_000,
    ) {
        let gate = ReductionGate::new(ReductionConfig::new(percentage, minimum));

        let plain = gate.evaluate(&GateInput {
            current: Some(TestSnapshot::new(effective, 0)),
            previous: Some(TestSnapshot::new(prev_effective, 0)),
        });
        let padded = gate.evaluate(&GateInput {
            current: Some(TestSnapshot::new(effective + pad, pad)),
            previous: Some(TestSnapshot::new(prev_effective + prev_pad, prev_pad)),
        });

        prop_assert_eq!(plain, padded);
    }

    /// Thresholds that print as plain numbers survive the string
    /// constructor exactly.
    #[test]
    fn string_construction_stores_parsed_values(
        percentage in 0.0f64..1000.0,
        minimum in 0u32..100_000,
    ) {
        let config = ReductionConfig::from_strings(
            &percentage.to_string(),
            &minimum.to_string(),
        );

        prop_assert!(!config.is_configuration_error());
        prop_assert_eq!(config.percentage(), percentage);
        prop_assert_eq!(config.minimum_amount(), minimum);
    }

    /// A misconfigured gate never degrades a build.
    #[test]
    fn misconfigured_gate_always_passes(
        total in proptest::option::of(0u32..10_000),
        prev_total in proptest::option::of(0u32..10_000),
    ) {
        let gate = ReductionGate::new(ReductionConfig::from_strings("not-a-number", "0"));
        let result = gate.evaluate(&GateInput {
            current: total.map(|t| TestSnapshot::new(t, 0)),
            previous: prev_total.map(|t| TestSnapshot::new(t, 0)),
        });

        prop_assert!(result.passed());
        prop_assert_eq!(result.log.len(), 1);
    }

    /// With no previous build, the verdict is exactly the minimum-amount
    /// comparison.
    #[test]
    fn minimum_amount_is_sole_check_without_previous(
        minimum in 0u32..10_000,
        total in 0u32..10_000,
    ) {
        let gate = ReductionGate::new(ReductionConfig::new(100.0, minimum));
        let result = gate.evaluate(&GateInput {
            current: Some(TestSnapshot::new(total, 0)),
            previous: None,
        });

        prop_assert_eq!(result.passed(), u64::from(total) >= u64::from(minimum));
    }
}
