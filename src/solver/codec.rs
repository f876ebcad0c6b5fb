//! Memoizing wrapper around feedback computation
//!
//! `Feedback::compute` is pure, so its results can be remembered per
//! (guess, answer) pair. The table lives inside the component rather than in
//! ambient global state, and can be cleared explicitly.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;
use std::sync::Mutex;

/// Feedback codec with a (guess, answer) → Feedback memo table
///
/// Writes are insert-once: concurrent recomputation of the same pair yields
/// the same pure value, so whichever thread inserts first wins.
#[derive(Debug, Default)]
pub struct FeedbackCodec {
    cache: Mutex<FxHashMap<(Word, Word), Feedback>>,
}

impl FeedbackCodec {
    /// Create an empty codec
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feedback for one (guess, answer) pair, served from the memo table
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn feedback(&self, guess: Word, answer: Word) -> Feedback {
        let mut cache = self.cache.lock().expect("feedback cache poisoned");
        *cache
            .entry((guess, answer))
            .or_insert_with(|| Feedback::compute(guess, answer))
    }

    /// Feedback for one guess against a sweep of answers
    ///
    /// Takes the cache lock once for the whole sweep; the partitioner uses
    /// this to avoid per-candidate lock traffic.
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn feedbacks(&self, guess: Word, answers: &[Word]) -> Vec<Feedback> {
        let mut cache = self.cache.lock().expect("feedback cache poisoned");
        answers
            .iter()
            .map(|&answer| {
                *cache
                    .entry((guess, answer))
                    .or_insert_with(|| Feedback::compute(guess, answer))
            })
            .collect()
    }

    /// Number of memoized pairs
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.lock().expect("feedback cache poisoned").len()
    }

    /// Whether the memo table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all memoized pairs
    ///
    /// # Panics
    /// Panics only if the cache mutex was poisoned by a panicking thread.
    pub fn clear(&self) {
        self.cache.lock().expect("feedback cache poisoned").clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn matches_direct_computation() {
        let codec = FeedbackCodec::new();
        let guess = word("speed");
        let answer = word("erase");

        assert_eq!(
            codec.feedback(guess, answer),
            Feedback::compute(guess, answer)
        );
    }

    #[test]
    fn repeated_lookups_hit_the_table() {
        let codec = FeedbackCodec::new();
        let guess = word("crane");
        let answer = word("slate");

        let first = codec.feedback(guess, answer);
        assert_eq!(codec.len(), 1);

        let second = codec.feedback(guess, answer);
        assert_eq!(first, second);
        assert_eq!(codec.len(), 1);
    }

    #[test]
    fn batch_matches_singles() {
        let codec = FeedbackCodec::new();
        let guess = word("crane");
        let answers = [word("slate"), word("irate"), word("crane")];

        let batch = codec.feedbacks(guess, &answers);
        for (feedback, &answer) in batch.iter().zip(&answers) {
            assert_eq!(*feedback, codec.feedback(guess, answer));
        }
        assert_eq!(codec.len(), answers.len());
    }

    #[test]
    fn clear_resets_the_table() {
        let codec = FeedbackCodec::new();
        codec.feedback(word("crane"), word("slate"));
        assert!(!codec.is_empty());

        codec.clear();
        assert!(codec.is_empty());

        // Still serves correct values after a reset
        assert_eq!(
            codec.feedback(word("speed"), word("erase")),
            Feedback::compute(word("speed"), word("erase"))
        );
    }
}
