//! CVM estimator of the number of distinct elements in a stream or dataset.
//!
//! The estimator keeps a sample of previously seen values together with the
//! probability `rate` with which every value seen so far is expected to be
//! retained. It is defined by two parameters fixed at construction:
//! - `capacity`: maximum number of samples held in memory before thinning.
//! - `sample_rate`: probability of keeping each sample during thinning,
//!   `0.5` by default.
//!
//! # Algorithm
//!
//! For every added value a uniform `r` in `[0, 1)` is drawn:
//! - if `r >= rate`, the value is not selected and is removed from the sample
//!   in case an earlier occurrence was selected, so that each occurrence gets
//!   an independent coin flip;
//! - otherwise the value is inserted into the sample.
//!
//! Whenever the sample reaches `capacity`, it is thinned: every sample is
//! kept with probability `sample_rate` and `rate` is multiplied by
//! `sample_rate`. Thinning repeats until the sample is strictly below
//! `capacity`.
//!
//! Every distinct value seen is retained with probability exactly `rate`,
//! so `len / rate` is an unbiased estimate of the distinct count.
//!
//! [Distinct Elements in Streams: An Algorithm for the (Text) Book](https://arxiv.org/pdf/2301.10191v2)
//!
//! # Memory
//!
//! At most `capacity - 1` values are held between calls, regardless of how
//! many values are added. Use [`calculate_capacity`](crate::capacity::calculate_capacity)
//! to size it for a target accuracy and confidence.

use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::builder::EstimatorBuilder;
use crate::error::Result;
use crate::random::{RandomSource, Randomness};
use crate::sample::{DefaultSampleSet, SampleSet};
use crate::stats::Stats;

/// Default probability of keeping a sample during thinning.
pub const DEFAULT_SAMPLE_RATE: f64 = 0.5;

/// Distinct count estimator over items of type `T`.
///
/// Samples are stored in `S` and random values drawn from `R`; both are
/// owned exclusively by the estimator.
pub struct Estimator<T, S = DefaultSampleSet<T>, R = Randomness> {
    /// Maximum number of samples before thinning
    capacity: usize,
    /// Probability of keeping a sample during thinning
    sample_rate: f64,
    /// Current probability of retaining a newly added value
    rate: f64,
    /// Retained samples
    samples: S,
    /// Source of uniform values in `[0, 1)`
    random: R,
    _item: PhantomData<T>,
}

impl<T: Hash + Eq> Estimator<T> {
    /// Create an estimator with the given capacity and default settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`](crate::Error::InvalidCapacity) if
    /// `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cvm_estimator::Estimator;
    ///
    /// let mut estimator = Estimator::new(100).unwrap();
    /// estimator.add("a").add("b").add("a");
    /// assert_eq!(estimator.estimate(), 2.0);
    /// ```
    pub fn new(capacity: usize) -> Result<Self> {
        Self::builder(capacity).build()
    }

    /// Return a builder for an estimator with the given capacity.
    pub fn builder(capacity: usize) -> EstimatorBuilder<T> {
        EstimatorBuilder::new(capacity)
    }
}

impl<T, S, R> Estimator<T, S, R>
where
    S: SampleSet<T>,
    R: RandomSource,
{
    /// Create estimator from already validated parts
    pub(crate) fn from_parts(capacity: usize, sample_rate: f64, samples: S, random: R) -> Self {
        debug!(capacity, sample_rate, "created estimator");
        Self {
            capacity,
            sample_rate,
            rate: 1.0,
            samples,
            random,
            _item: PhantomData,
        }
    }

    /// Return the maximum number of samples held before thinning.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Return the probability of keeping a sample during thinning.
    #[inline]
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Return the current probability of retaining a newly added value.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Return the number of retained samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Return whether no samples are retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Return the retained samples.
    #[inline]
    pub fn samples(&self) -> &S {
        &self.samples
    }

    /// Iterate over retained samples in the container's order.
    pub fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        self.samples.iter()
    }

    /// Return the random source.
    #[inline]
    pub fn random_source(&self) -> &R {
        &self.random
    }

    /// Add a value to the estimator.
    ///
    /// The value is either selected and stored as a sample, or ignored and
    /// removed from samples if an earlier occurrence was stored. Reaching
    /// capacity thins the samples until there is room again.
    #[inline]
    pub fn add(&mut self, value: T) -> &mut Self {
        if self.random.next_f64() >= self.rate {
            self.samples.remove(&value);
            return self;
        }

        self.samples.insert(value);
        while self.samples.len() >= self.capacity {
            self.thin();
        }

        self
    }

    /// Keep each sample with probability `sample_rate` and lower the rate
    /// accordingly.
    fn thin(&mut self) {
        let sample_rate = self.sample_rate;
        let random = &mut self.random;
        self.samples.retain(|_| random.next_f64() < sample_rate);
        self.rate *= sample_rate;
        trace!(retained = self.samples.len(), rate = self.rate, "thinned samples");
    }

    /// Return estimated number of distinct values added since creation or
    /// the last [`clear`](Self::clear).
    #[inline]
    pub fn estimate(&self) -> f64 {
        self.samples.len() as f64 / self.rate
    }

    /// Reset the estimator to its initial state, keeping its configuration.
    pub fn clear(&mut self) {
        self.rate = 1.0;
        self.samples.clear();
        debug!(capacity = self.capacity, "cleared estimator");
    }

    /// Return a snapshot of the estimator's state.
    pub fn stats(&self) -> Stats {
        Stats {
            capacity: self.capacity,
            sample_rate: self.sample_rate,
            rate: self.rate,
            size: self.samples.len(),
            estimate: self.estimate(),
        }
    }
}

impl<T, S, R> Extend<T> for Estimator<T, S, R>
where
    S: SampleSet<T>,
    R: RandomSource,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, S, R> Debug for Estimator<T, S, R>
where
    S: SampleSet<T>,
    R: RandomSource,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ capacity: {}, size: {}, rate: {}, estimate: {} }}",
            self.capacity,
            self.len(),
            self.rate,
            self.estimate()
        )
    }
}
