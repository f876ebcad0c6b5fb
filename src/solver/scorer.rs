//! Recursive expected-information scoring
//!
//! For a candidate set and a lookahead depth, computes a score for every word
//! in the guess vocabulary: the expected information (in nats) gained by
//! learning which feedback bucket the true answer falls into, plus, for
//! depth > 1, the best follow-up score achievable inside each bucket with one
//! fewer guess remaining.
//!
//! The same candidate subsets recur across many top-level guesses, so the
//! whole computation is memoized on (candidate set, depth).

use super::partition::Partitioner;
use crate::core::{CandidateSet, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

/// Upper bound on lookahead depth unless overridden
///
/// Each extra level multiplies work by up to |guess vocabulary| × the
/// branching factor, so requests above the configured limit are clamped.
pub const DEFAULT_DEPTH_LIMIT: usize = 3;

/// Scores for every guess word, computed for one (candidate set, depth)
pub type ScoreTable = FxHashMap<Word, f64>;

/// Recursive scorer over a fixed guess vocabulary
///
/// Owns its memo table and the partitioner (and, through it, the feedback
/// codec). All cached values are pure functions of their keys; writes are
/// insert-once, so concurrent recomputation is wasteful but never wrong.
pub struct Scorer {
    guesses: Vec<Word>,
    partitioner: Partitioner,
    cache: Mutex<FxHashMap<(CandidateSet, usize), Arc<ScoreTable>>>,
    empty: Arc<ScoreTable>,
    depth_limit: usize,
}

impl Scorer {
    /// Create a scorer for the given guess vocabulary
    #[must_use]
    pub fn new(guesses: Vec<Word>) -> Self {
        Self {
            guesses,
            partitioner: Partitioner::new(),
            cache: Mutex::new(FxHashMap::default()),
            empty: Arc::new(ScoreTable::default()),
            depth_limit: DEFAULT_DEPTH_LIMIT,
        }
    }

    /// Override the lookahead depth ceiling
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// The guess vocabulary this scorer ranges over
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The partitioner this scorer computes with
    #[must_use]
    pub fn partitioner(&self) -> &Partitioner {
        &self.partitioner
    }

    /// Score every guess word against `candidates` at the given depth
    ///
    /// Depth 0 and the empty candidate set are base cases returning the empty
    /// table. Depths above the configured ceiling are clamped to it.
    pub fn score(&self, candidates: &CandidateSet, depth: usize) -> Arc<ScoreTable> {
        self.score_with_progress(candidates, depth, &|| {})
    }

    /// `score`, invoking `tick` once per guess word at the top level
    ///
    /// The callback fires from the scoring thread pool, so it must be `Sync`;
    /// recursive sub-computations do not tick. The interactive driver hangs a
    /// progress bar off this without the scorer knowing about terminals.
    ///
    /// # Panics
    /// Panics only if a cache mutex was poisoned by a panicking thread.
    pub fn score_with_progress<F: Fn() + Sync>(
        &self,
        candidates: &CandidateSet,
        depth: usize,
        tick: &F,
    ) -> Arc<ScoreTable> {
        let depth = depth.min(self.depth_limit);
        if depth == 0 || candidates.is_empty() {
            return Arc::clone(&self.empty);
        }

        let key = (candidates.clone(), depth);
        if let Some(hit) = self.cache.lock().expect("score cache poisoned").get(&key) {
            return Arc::clone(hit);
        }

        let table = Arc::new(self.compute(candidates, depth, tick));

        // Insert-once: a racing thread's identical result is kept instead
        let mut cache = self.cache.lock().expect("score cache poisoned");
        Arc::clone(cache.entry(key).or_insert(table))
    }

    /// Score every guess in parallel; each guess is independent given fixed
    /// candidates and depth
    fn compute<F: Fn() + Sync>(
        &self,
        candidates: &CandidateSet,
        depth: usize,
        tick: &F,
    ) -> ScoreTable {
        let n = candidates.len() as f64;

        self.guesses
            .par_iter()
            .map(|&guess| {
                let partition = self.partitioner.partition(guess, candidates);

                let mut immediate = 0.0;
                let mut lookahead = 0.0;
                for bucket in partition.values() {
                    let size = bucket.len() as f64;
                    // Expected information gain, uniform prior over candidates.
                    // A bucket holding the whole set contributes ln(1) = 0.
                    immediate += size / n * (n / size).ln();

                    if depth > 1 {
                        let sub = self.score(bucket, depth - 1);
                        lookahead += sub.values().copied().fold(0.0_f64, f64::max);
                    }
                }

                tick();
                (guess, immediate + lookahead)
            })
            .collect()
    }

    /// Number of memoized score tables
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn cached_tables(&self) -> usize {
        self.cache.lock().expect("score cache poisoned").len()
    }

    /// Drop every memo table (scores, partitions, feedback pairs)
    ///
    /// # Panics
    /// Panics only if a cache mutex was poisoned by a panicking thread.
    pub fn clear_caches(&self) {
        self.cache.lock().expect("score cache poisoned").clear();
        self.partitioner.clear();
    }
}
