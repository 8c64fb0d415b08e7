use std::fmt::{Debug, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::{is_fraction, Error, Result};
use crate::estimator::{Estimator, DEFAULT_SAMPLE_RATE};
use crate::random::{RandomSource, Randomness};
use crate::sample::{DefaultSampleSet, SampleSet};

/// Builder for configuring an [`Estimator`].
///
/// Only `capacity` is required; the sample rate defaults to `0.5`, the random
/// source to [`Randomness::default`] and the storage to an empty
/// [`DefaultSampleSet`]. All arguments are validated by [`build`](Self::build).
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use cvm_estimator::random::SeededRandom;
/// use cvm_estimator::Estimator;
///
/// let mut estimator = Estimator::<u64>::builder(1_000)
///     .random(SeededRandom::seeded(42))
///     .storage(BTreeSet::new())
///     .build()
///     .unwrap();
///
/// estimator.extend(0..10_000);
/// assert!(estimator.len() < 1_000);
/// ```
pub struct EstimatorBuilder<T, S = DefaultSampleSet<T>, R = Randomness> {
    capacity: usize,
    sample_rate: f64,
    storage: S,
    random: R,
    _item: PhantomData<T>,
}

impl<T: Hash + Eq> EstimatorBuilder<T> {
    /// Create a builder with the given capacity and default settings.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            sample_rate: DEFAULT_SAMPLE_RATE,
            storage: DefaultSampleSet::default(),
            random: Randomness::default(),
            _item: PhantomData,
        }
    }
}

impl<T, S, R> EstimatorBuilder<T, S, R> {
    /// Set the probability of keeping each sample during thinning.
    ///
    /// Values other than `0.5` change the accuracy characteristics: a
    /// capacity computed with
    /// [`calculate_capacity`](crate::capacity::calculate_capacity) no longer
    /// carries its epsilon / delta guarantee.
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the source of uniform random values.
    pub fn random<R2: RandomSource>(self, random: R2) -> EstimatorBuilder<T, S, R2> {
        EstimatorBuilder {
            capacity: self.capacity,
            sample_rate: self.sample_rate,
            storage: self.storage,
            random,
            _item: PhantomData,
        }
    }

    /// Set the container holding samples. It must be empty.
    pub fn storage<S2: SampleSet<T>>(self, storage: S2) -> EstimatorBuilder<T, S2, R> {
        EstimatorBuilder {
            capacity: self.capacity,
            sample_rate: self.sample_rate,
            storage,
            random: self.random,
            _item: PhantomData,
        }
    }

    /// Validate the configuration and create the estimator.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidCapacity`] if capacity is zero.
    /// - [`Error::InvalidSampleRate`] if the sample rate is not within (0, 1).
    /// - [`Error::StorageNotEmpty`] if the supplied storage holds values.
    pub fn build(self) -> Result<Estimator<T, S, R>>
    where
        S: SampleSet<T>,
        R: RandomSource,
    {
        if self.capacity == 0 {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        if !is_fraction(self.sample_rate) {
            return Err(Error::InvalidSampleRate(self.sample_rate));
        }
        if !self.storage.is_empty() {
            return Err(Error::StorageNotEmpty(self.storage.len()));
        }

        Ok(Estimator::from_parts(
            self.capacity,
            self.sample_rate,
            self.storage,
            self.random,
        ))
    }
}

impl<T, S, R> Debug for EstimatorBuilder<T, S, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EstimatorBuilder")
            .field("capacity", &self.capacity)
            .field("sample_rate", &self.sample_rate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::random::ScriptedRandom;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let estimator = EstimatorBuilder::<u32>::new(15).build().unwrap();
        assert_eq!(estimator.capacity(), 15);
        assert_eq!(estimator.sample_rate(), DEFAULT_SAMPLE_RATE);
        assert_eq!(estimator.rate(), 1.0);
        assert_eq!(estimator.len(), 0);
        assert!(matches!(estimator.random_source(), Randomness::Seeded(_)));
    }

    #[test]
    fn test_custom_sample_rate() {
        let estimator = Estimator::<u32>::builder(20).sample_rate(0.7).build().unwrap();
        assert_eq!(estimator.sample_rate(), 0.7);
    }

    #[test]
    fn test_custom_random() {
        let mut estimator = Estimator::<u32>::builder(20)
            .random(ScriptedRandom::constant(0.3))
            .build()
            .unwrap();
        estimator.add(1);
        assert_eq!(estimator.random_source().draws(), 1);
        assert_eq!(estimator.len(), 1);
    }

    #[test]
    fn test_custom_storage() {
        let mut estimator = Estimator::<u32>::builder(20)
            .storage(BTreeSet::new())
            .build()
            .unwrap();
        assert_eq!(estimator.len(), 0);
        estimator.add(5);
        assert_eq!(estimator.len(), 1);
        assert!(estimator.samples().contains(&5));
    }

    #[test_case(0 => Error::InvalidCapacity(0); "zero capacity")]
    fn test_invalid_capacity(capacity: usize) -> Error {
        EstimatorBuilder::<u32>::new(capacity).build().unwrap_err()
    }

    #[test_case(0.0 => Error::InvalidSampleRate(0.0); "zero")]
    #[test_case(1.0 => Error::InvalidSampleRate(1.0); "one")]
    #[test_case(1.5 => Error::InvalidSampleRate(1.5); "above one")]
    #[test_case(-0.5 => Error::InvalidSampleRate(-0.5); "negative")]
    fn test_invalid_sample_rate(sample_rate: f64) -> Error {
        EstimatorBuilder::<u32>::new(10)
            .sample_rate(sample_rate)
            .build()
            .unwrap_err()
    }

    #[test]
    fn test_nan_sample_rate() {
        let result = EstimatorBuilder::<u32>::new(10).sample_rate(f64::NAN).build();
        assert!(matches!(result, Err(Error::InvalidSampleRate(_))));
    }

    #[test]
    fn test_non_empty_storage() {
        let storage: BTreeSet<u32> = (0..3).collect();
        let result = Estimator::<u32>::builder(10).storage(storage).build();
        assert_eq!(result.unwrap_err(), Error::StorageNotEmpty(3));
    }

    #[test]
    fn test_debug() {
        let builder = EstimatorBuilder::<u32>::new(10).sample_rate(0.25);
        assert_eq!(
            format!("{:?}", builder),
            "EstimatorBuilder { capacity: 10, sample_rate: 0.25, .. }"
        );
    }
}
