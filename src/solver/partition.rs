//! Partitioning a candidate set by feedback code
//!
//! For a fixed guess, every candidate answer produces exactly one feedback
//! code; grouping candidates by that code partitions the set. Bucket sets are
//! canonical `CandidateSet`s so they can key the score cache downstream.

use super::codec::FeedbackCodec;
use crate::core::{CandidateSet, Feedback, Word};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};

/// A partition of a candidate set: feedback code → bucket of candidates
///
/// Buckets with zero candidates are absent from the map.
pub type Partition = FxHashMap<Feedback, CandidateSet>;

/// Partitioner with a (guess, candidate set) → partition memo table
#[derive(Debug, Default)]
pub struct Partitioner {
    codec: FeedbackCodec,
    cache: Mutex<FxHashMap<(Word, CandidateSet), Arc<Partition>>>,
}

impl Partitioner {
    /// Create an empty partitioner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The feedback codec (and its memo table) this partitioner computes with
    #[must_use]
    pub fn codec(&self) -> &FeedbackCodec {
        &self.codec
    }

    /// Group `candidates` by the feedback each would produce against `guess`
    ///
    /// Every candidate lands in exactly one bucket and the buckets' union is
    /// the input set. Results are shared via `Arc` and memoized on the
    /// (guess, candidates) pair; `CandidateSet` equality is structural, so
    /// equal sets built on different rounds share one entry.
    ///
    /// # Panics
    /// Panics only if a cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn partition(&self, guess: Word, candidates: &CandidateSet) -> Arc<Partition> {
        let key = (guess, candidates.clone());
        if let Some(hit) = self
            .cache
            .lock()
            .expect("partition cache poisoned")
            .get(&key)
        {
            return Arc::clone(hit);
        }

        let partition = Arc::new(self.compute(guess, candidates));

        // Insert-once: a racing thread's identical result is kept instead
        let mut cache = self.cache.lock().expect("partition cache poisoned");
        Arc::clone(cache.entry(key).or_insert(partition))
    }

    fn compute(&self, guess: Word, candidates: &CandidateSet) -> Partition {
        let feedbacks = self.codec.feedbacks(guess, candidates.words());

        let mut buckets: FxHashMap<Feedback, Vec<Word>> = FxHashMap::default();
        for (&candidate, feedback) in candidates.words().iter().zip(feedbacks) {
            buckets.entry(feedback).or_default().push(candidate);
        }

        // Candidates were visited in canonical order, so each bucket is
        // already sorted and duplicate-free.
        buckets
            .into_iter()
            .map(|(feedback, words)| (feedback, CandidateSet::from_sorted(words)))
            .collect()
    }

    /// Number of memoized partitions
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().expect("partition cache poisoned").len()
    }

    /// Whether the memo table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized partitions and feedback pairs
    ///
    /// # Panics
    /// Panics only if a cache mutex was poisoned by a panicking thread.
    pub fn clear(&self) {
        self.cache.lock().expect("partition cache poisoned").clear();
        self.codec.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|s| word(s)).collect()
    }

    #[test]
    fn buckets_partition_the_set_exactly() {
        let partitioner = Partitioner::new();
        let candidates = set(&["slate", "irate", "crate", "grate", "crane"]);

        let partition = partitioner.partition(word("crane"), &candidates);

        // Union of buckets is the original set, with no overlap
        let total: usize = partition.values().map(CandidateSet::len).sum();
        assert_eq!(total, candidates.len());

        let mut seen: Vec<Word> = partition
            .values()
            .flat_map(|bucket| bucket.iter())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen.as_slice(), candidates.words());
    }

    #[test]
    fn bucket_membership_matches_codec() {
        let partitioner = Partitioner::new();
        let guess = word("crane");
        let candidates = set(&["slate", "irate", "crate"]);

        let partition = partitioner.partition(guess, &candidates);

        for candidate in candidates.iter() {
            let feedback = Feedback::compute(guess, candidate);
            let bucket = partition.get(&feedback).expect("bucket must exist");
            assert!(bucket.contains(candidate));
        }
    }

    #[test]
    fn no_empty_buckets() {
        let partitioner = Partitioner::new();
        let partition = partitioner.partition(word("crane"), &set(&["slate", "irate"]));
        assert!(partition.values().all(|bucket| !bucket.is_empty()));
    }

    #[test]
    fn empty_candidates_yield_empty_partition() {
        let partitioner = Partitioner::new();
        let partition = partitioner.partition(word("crane"), &CandidateSet::empty());
        assert!(partition.is_empty());
    }

    #[test]
    fn identical_inputs_share_one_cached_partition() {
        let partitioner = Partitioner::new();
        let first = partitioner.partition(word("crane"), &set(&["slate", "irate"]));
        // Same set contents, assembled in a different order
        let second = partitioner.partition(word("crane"), &set(&["irate", "slate"]));

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(partitioner.len(), 1);
    }

    #[test]
    fn distinct_guesses_get_distinct_entries() {
        let partitioner = Partitioner::new();
        let candidates = set(&["slate", "irate"]);

        partitioner.partition(word("crane"), &candidates);
        partitioner.partition(word("slate"), &candidates);
        assert_eq!(partitioner.len(), 2);
    }

    #[test]
    fn clear_resets_both_tables() {
        let partitioner = Partitioner::new();
        partitioner.partition(word("crane"), &set(&["slate", "irate"]));
        assert!(!partitioner.is_empty());
        assert!(!partitioner.codec().is_empty());

        partitioner.clear();
        assert!(partitioner.is_empty());
        assert!(partitioner.codec().is_empty());
    }
}
