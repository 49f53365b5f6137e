//! Error types for numerology calculations.

/// Errors from numerology calculations.
///
/// Only input validation can fail; every later stage is total over a valid
/// birth date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum NumerologyError {
    /// A birth-date component is outside its accepted range.
    #[error("invalid {field}: {value} (expected {min}..={max})")]
    InvalidInput {
        /// Which component failed ("day", "month" or "year").
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Lowest accepted value.
        min: u32,
        /// Highest accepted value.
        max: u32,
    },
}
