//! Sizing of the estimator's sample set.
//!
//! The CVM analysis bounds the number of samples needed to estimate the
//! distinct count of a stream of `n` values within relative error `epsilon`
//! with probability at least `1 - delta`:
//!
//! ```text
//! capacity = min(n, ceil(log2(n / delta) / epsilon^2))
//! ```
//!
//! The bound is logarithmic in `n / delta` and inverse quadratic in
//! `epsilon`. Overestimating `n` only costs memory; underestimating it voids
//! the accuracy guarantee.
//!
//! [Distinct Elements in Streams: An Algorithm for the (Text) Book](https://arxiv.org/pdf/2301.10191v2)

use tracing::debug;

use crate::error::{is_fraction, Error, Result};

/// Default relative error: estimates within ±5% of the true value.
pub const DEFAULT_EPSILON: f64 = 0.05;
/// Default failure probability: 99% confidence.
pub const DEFAULT_DELTA: f64 = 0.01;

/// Calculate the capacity required to estimate the number of distinct
/// values among `n` values with relative error `epsilon` and failure
/// probability `delta`.
///
/// The result is never below 1. It never exceeds `n` when `n >= 1`; for a
/// fractional `n < 1` the result is 1 and therefore exceeds `n`.
///
/// # Errors
///
/// - [`Error::InvalidTotal`] if `n` is not a finite positive number.
/// - [`Error::InvalidEpsilon`] if `epsilon` is not within (0, 1).
/// - [`Error::InvalidDelta`] if `delta` is not within (0, 1).
///
/// # Examples
///
/// ```
/// use cvm_estimator::capacity::calculate_capacity;
///
/// // 1 billion values, ±10% with 99% confidence.
/// assert_eq!(calculate_capacity(1e9, 0.1, 0.01).unwrap(), 3_655);
/// ```
pub fn calculate_capacity(n: f64, epsilon: f64, delta: f64) -> Result<usize> {
    if !(n.is_finite() && n > 0.0) {
        return Err(Error::InvalidTotal(n));
    }
    if !is_fraction(epsilon) {
        return Err(Error::InvalidEpsilon(epsilon));
    }
    if !is_fraction(delta) {
        return Err(Error::InvalidDelta(delta));
    }

    let bound = ((n / delta).log2() / (epsilon * epsilon)).ceil();
    // `as` saturates for bounds beyond `usize::MAX`
    let capacity = n.min(bound).ceil().max(1.0) as usize;
    debug!(n, epsilon, delta, capacity, "calculated capacity");

    Ok(capacity)
}

/// Calculate capacity for `n` values using [`DEFAULT_EPSILON`] and
/// [`DEFAULT_DELTA`].
///
/// ```
/// use cvm_estimator::capacity::default_capacity;
///
/// assert_eq!(default_capacity(1e9).unwrap(), 14_617);
/// ```
#[inline]
pub fn default_capacity(n: f64) -> Result<usize> {
    calculate_capacity(n, DEFAULT_EPSILON, DEFAULT_DELTA)
}
