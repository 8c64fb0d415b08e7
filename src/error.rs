//! Error returned when an estimator or a capacity calculation is configured
//! with out-of-range arguments.
//!
//! All checks happen eagerly at construction time, so `add`, `estimate` and
//! `clear` never fail once an [`Estimator`](crate::Estimator) exists.

use thiserror::Error;

/// Invalid configuration or argument.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Capacity must be a positive integer.
    #[error("invalid capacity {0}: must be a positive integer")]
    InvalidCapacity(usize),
    /// Sample rate must lie strictly between 0 and 1.
    #[error("invalid sample rate {0}: must be between 0 and 1 (exclusive)")]
    InvalidSampleRate(f64),
    /// Total number of values must be a finite positive number.
    #[error("invalid n {0}: must be a finite positive number")]
    InvalidTotal(f64),
    /// Relative error must lie strictly between 0 and 1.
    #[error("invalid epsilon {0}: must be between 0 and 1 (exclusive)")]
    InvalidEpsilon(f64),
    /// Failure probability must lie strictly between 0 and 1.
    #[error("invalid delta {0}: must be between 0 and 1 (exclusive)")]
    InvalidDelta(f64),
    /// A caller supplied sample container must start out empty.
    #[error("invalid storage: expected an empty container, found {0} values")]
    StorageNotEmpty(usize),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns whether `value` lies in the open interval (0, 1).
///
/// `NaN` is never a fraction.
#[inline]
pub(crate) fn is_fraction(value: f64) -> bool {
    value > 0.0 && value < 1.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0.5 => true)]
    #[test_case(f64::MIN_POSITIVE => true)]
    #[test_case(0.0 => false)]
    #[test_case(1.0 => false)]
    #[test_case(-0.5 => false)]
    #[test_case(1.5 => false)]
    #[test_case(f64::NAN => false)]
    #[test_case(f64::INFINITY => false)]
    fn test_is_fraction(value: f64) -> bool {
        is_fraction(value)
    }

    #[test_case(Error::InvalidCapacity(0) => "invalid capacity 0: must be a positive integer")]
    #[test_case(Error::InvalidSampleRate(1.0) => "invalid sample rate 1: must be between 0 and 1 (exclusive)")]
    #[test_case(Error::InvalidTotal(-5.0) => "invalid n -5: must be a finite positive number")]
    #[test_case(Error::InvalidEpsilon(1.5) => "invalid epsilon 1.5: must be between 0 and 1 (exclusive)")]
    #[test_case(Error::InvalidDelta(0.0) => "invalid delta 0: must be between 0 and 1 (exclusive)")]
    #[test_case(Error::StorageNotEmpty(3) => "invalid storage: expected an empty container, found 3 values")]
    fn test_display(error: Error) -> String {
        error.to_string()
    }
}
