//! Sample set contract required by [`Estimator`](crate::Estimator).
//!
//! The estimator only needs a value-deduplicating container. Any type that
//! implements [`SampleSet`] may be supplied at construction; the crate ships
//! implementations for [`HashSet`] (the default, hashed with `wyhash`) and
//! [`BTreeSet`] (deterministic iteration order).
//!
//! Iteration order does not matter to the algorithm as long as the random
//! source is independent of it. Whether other containers preserve the
//! estimator's unbiasedness is the caller's responsibility.

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use wyhash::WyHash;

/// Default sample container used by [`Estimator`](crate::Estimator).
pub type DefaultSampleSet<T> = HashSet<T, BuildHasherDefault<WyHash>>;

/// Set-like container holding the estimator's samples.
pub trait SampleSet<T> {
    /// Return the number of values held.
    fn len(&self) -> usize;

    /// Return whether no values are held.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert `value`; inserting a value already present is a no-op.
    /// Returns whether the value was newly inserted.
    fn insert(&mut self, value: T) -> bool;

    /// Remove `value`, returning whether it was present.
    fn remove(&mut self, value: &T) -> bool;

    /// Remove every value.
    fn clear(&mut self);

    /// Iterate over held values in an implementation-defined order.
    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a;

    /// Visit every held value exactly once, keeping only those for which
    /// `keep` returns `true`.
    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F);
}

impl<T, S> SampleSet<T> for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    #[inline]
    fn insert(&mut self, value: T) -> bool {
        HashSet::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool {
        HashSet::remove(self, value)
    }

    #[inline]
    fn clear(&mut self) {
        HashSet::clear(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        HashSet::iter(self)
    }

    #[inline]
    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        HashSet::retain(self, keep)
    }
}

impl<T: Ord> SampleSet<T> for BTreeSet<T> {
    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    #[inline]
    fn insert(&mut self, value: T) -> bool {
        BTreeSet::insert(self, value)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> bool {
        BTreeSet::remove(self, value)
    }

    #[inline]
    fn clear(&mut self) {
        BTreeSet::clear(self)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T> + 'a
    where
        T: 'a,
    {
        BTreeSet::iter(self)
    }

    #[inline]
    fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        BTreeSet::retain(self, keep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: SampleSet<u32> + Default>() -> Vec<u32> {
        let mut set = S::default();
        assert!(set.is_empty());

        assert!(set.insert(3));
        assert!(set.insert(1));
        assert!(set.insert(2));
        assert!(!set.insert(2));
        assert_eq!(set.len(), 3);

        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(!set.remove(&42));
        assert_eq!(set.len(), 2);

        set.insert(4);
        set.retain(|v| v % 2 == 0);

        let mut values: Vec<u32> = set.iter().copied().collect();
        values.sort_unstable();

        set.clear();
        assert!(set.is_empty());
        values
    }

    #[test]
    fn test_hash_set_contract() {
        assert_eq!(exercise::<DefaultSampleSet<u32>>(), vec![2, 4]);
        assert_eq!(exercise::<HashSet<u32>>(), vec![2, 4]);
    }

    #[test]
    fn test_btree_set_contract() {
        assert_eq!(exercise::<BTreeSet<u32>>(), vec![2, 4]);
    }

    #[test]
    fn test_btree_set_iterates_in_order() {
        let mut set: BTreeSet<i32> = BTreeSet::new();
        for v in [5, 1, 4, 2, 3] {
            SampleSet::insert(&mut set, v);
        }
        let values: Vec<i32> = SampleSet::iter(&set).copied().collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_retain_visits_each_value_once() {
        let mut set: DefaultSampleSet<u32> = (0..100).collect();
        let mut visits = 0;
        SampleSet::retain(&mut set, |_| {
            visits += 1;
            false
        });
        assert_eq!(visits, 100);
        assert!(SampleSet::is_empty(&set));
    }
}
