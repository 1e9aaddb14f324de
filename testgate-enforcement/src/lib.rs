//! # testgate-enforcement
//!
//! Enforcement engine for testgate: the test-reduction quality gate,
//! interactive threshold validation, the collaborator runner, and report
//! generation.

pub mod gates;
pub mod reporters;
pub mod runner;
pub mod validation;
