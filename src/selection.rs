//! Exercise selection strategies.
//!
//! Picking one exercise out of a category's candidate pool is the only
//! nondeterministic step in planning. The choice goes through the
//! [`ExerciseSelector`] trait so callers can inject the random source:
//! a uniform selector over any [`rand::Rng`] in production, a seeded
//! generator or a fixed index sequence in tests.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_workout::selection::{ExerciseSelector, UniformSelector};
//! use u_workout::models::{Category, Difficulty, ExerciseRecord};
//!
//! let squat = ExerciseRecord::new("squats", 9.0, Difficulty::Beginner);
//! let lunge = ExerciseRecord::new("lunge", 8.0, Difficulty::Intermediate);
//! let pool = vec![&squat, &lunge];
//!
//! let mut selector = UniformSelector::new(SmallRng::seed_from_u64(7));
//! let picked = selector.select(Category::Strength, &pool).unwrap();
//! assert!(picked.name == "squats" || picked.name == "lunge");
//! ```

use rand::prelude::IndexedRandom;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::models::{Category, ExerciseRecord};

/// Chooses one exercise from a candidate pool.
///
/// Implementations must return `Some` for any non-empty pool and an
/// element of that pool; `None` only for an empty pool.
pub trait ExerciseSelector {
    /// Selects an exercise for `category` from `pool`.
    fn select<'a>(
        &mut self,
        category: Category,
        pool: &[&'a ExerciseRecord],
    ) -> Option<&'a ExerciseRecord>;
}

impl<S: ExerciseSelector + ?Sized> ExerciseSelector for &mut S {
    fn select<'a>(
        &mut self,
        category: Category,
        pool: &[&'a ExerciseRecord],
    ) -> Option<&'a ExerciseRecord> {
        (**self).select(category, pool)
    }
}

/// Uniform random choice backed by any RNG.
#[derive(Debug, Clone)]
pub struct UniformSelector<R> {
    rng: R,
}

impl<R: Rng> UniformSelector<R> {
    /// Wraps an RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the underlying RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl UniformSelector<ThreadRng> {
    /// Uniform selector over the thread-local generator.
    pub fn thread_local() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> ExerciseSelector for UniformSelector<R> {
    fn select<'a>(
        &mut self,
        _category: Category,
        pool: &[&'a ExerciseRecord],
    ) -> Option<&'a ExerciseRecord> {
        pool.choose(&mut self.rng).copied()
    }
}

/// Deterministic selector replaying a fixed index sequence.
///
/// The k-th call picks `pool[indices[k % indices.len()] % pool.len()]`.
/// An empty sequence always picks the first candidate.
#[derive(Debug, Clone, Default)]
pub struct SequenceSelector {
    indices: Vec<usize>,
    cursor: usize,
}

impl SequenceSelector {
    /// Creates a selector replaying `indices`.
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, cursor: 0 }
    }

    /// Always picks the first candidate.
    pub fn first() -> Self {
        Self::default()
    }

    fn next_index(&mut self) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let idx = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        idx
    }
}

impl ExerciseSelector for SequenceSelector {
    fn select<'a>(
        &mut self,
        _category: Category,
        pool: &[&'a ExerciseRecord],
    ) -> Option<&'a ExerciseRecord> {
        if pool.is_empty() {
            return None;
        }
        let idx = self.next_index() % pool.len();
        pool.get(idx).copied()
    }
}
