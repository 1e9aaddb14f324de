//! Interactive threshold validation for configuration forms.
//!
//! These checks exist for immediate feedback while a pipeline step is
//! being configured. They are independent of `ReductionConfig`
//! construction, which silently falls back to its sticky invalid state
//! instead of raising these messages.

/// Validation failures for the two gate thresholds.
///
/// The `Display` output is the exact feedback text shown next to a form
/// field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please set a percentage")]
    MissingPercentage,

    #[error("Please set a minimum amount")]
    MissingMinimumAmount,

    #[error("Please enter a valid number")]
    InvalidNumber,
}

/// Check a percentage threshold as entered.
pub fn check_percentage(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingPercentage);
    }
    if value.parse::<f64>().is_err() {
        return Err(ValidationError::InvalidNumber);
    }
    Ok(())
}

/// Check a minimum-amount threshold as entered.
pub fn check_minimum_amount(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingMinimumAmount);
    }
    if value.parse::<u32>().is_err() {
        return Err(ValidationError::InvalidNumber);
    }
    Ok(())
}
