//! Quality gates.

pub mod reduction;
pub mod types;

pub use reduction::{ReductionConfig, ReductionGate};
pub use types::*;
