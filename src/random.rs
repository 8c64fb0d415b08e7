//! Sources of uniform random values in `[0, 1)` driving the estimator.
//!
//! The estimator draws one value per added item and one per retained sample
//! during thinning. Results are only as reproducible as the source: use
//! [`SeededRandom::seeded`] or [`ScriptedRandom`] for deterministic runs.

use std::fmt::{Debug, Formatter};

use enum_dispatch::enum_dispatch;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random sources shipped with the crate.
///
/// This is the default source type of [`Estimator`](crate::Estimator), which
/// allows switching between sources at runtime without changing the
/// estimator's type.
#[derive(Debug)]
#[enum_dispatch]
pub enum Randomness {
    /// Pseudorandom generator, see [`SeededRandom`].
    Seeded(SeededRandom),
    /// Fixed replayed sequence, see [`ScriptedRandom`].
    Scripted(ScriptedRandom),
    /// Caller supplied closure, see [`FnRandom`].
    Custom(FnRandom),
}

/// Source of independent values uniformly distributed in `[0, 1)`.
#[enum_dispatch(Randomness)]
pub trait RandomSource {
    /// Return the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl Randomness {
    /// Pseudorandom source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        SeededRandom::from_entropy().into()
    }

    /// Pseudorandom source with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        SeededRandom::seeded(seed).into()
    }

    /// Source replaying `values` in order, see [`ScriptedRandom`].
    pub fn scripted(values: impl Into<Vec<f64>>) -> Self {
        ScriptedRandom::new(values).into()
    }

    /// Source calling `f` for every draw.
    pub fn from_fn(f: impl FnMut() -> f64 + Send + 'static) -> Self {
        FnRandom::new(f).into()
    }
}

impl Default for Randomness {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Pseudorandom source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a generator seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Create a generator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.gen()
    }
}

/// Replays a fixed sequence of values, starting over once exhausted.
///
/// Meant for tests where every draw must be known in advance.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted values must not be empty");
        Self { values, pos: 0 }
    }

    /// Create a source always returning `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Return the number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}

/// Adapts a closure into a [`RandomSource`].
pub struct FnRandom(Box<dyn FnMut() -> f64 + Send>);

impl FnRandom {
    /// Wrap `f`, which must return values in `[0, 1)`.
    pub fn new(f: impl FnMut() -> f64 + Send + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl RandomSource for FnRandom {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        (self.0)()
    }
}

impl Debug for FnRandom {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnRandom")
    }
}
