//! `cvm-estimator` is a Rust crate designed to estimate the number of distinct elements in a stream or dataset with bounded memory.
//!
//! This library implements the CVM sampling algorithm: a single pass over the data keeps a
//! sample of at most `capacity - 1` values, thinned at random whenever it fills up, and
//! derives an unbiased estimate from the sample size and the current sampling rate.
//!
//! ```
//! use cvm_estimator::capacity::calculate_capacity;
//! use cvm_estimator::random::Randomness;
//! use cvm_estimator::Estimator;
//!
//! // ±10% with 99% confidence for a stream of up to 100K values.
//! let capacity = calculate_capacity(100_000.0, 0.1, 0.01).unwrap();
//! let mut estimator = Estimator::builder(capacity)
//!     .random(Randomness::seeded(7))
//!     .build()
//!     .unwrap();
//! for i in 0..100_000u32 {
//!     estimator.add(i % 5_000);
//! }
//! let estimate = estimator.estimate();
//! assert!((estimate - 5_000.0).abs() <= 500.0);
//! ```
mod builder;
pub mod capacity;
mod error;
pub mod estimator;
pub mod random;
pub mod sample;
mod stats;

pub use builder::EstimatorBuilder;
pub use error::{Error, Result};
pub use estimator::Estimator;
pub use stats::Stats;
