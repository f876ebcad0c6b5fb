//! One-word analysis
//!
//! Reports how a single guess word would partition the full answer
//! vocabulary: information term, bucket shape, expected remaining candidates.

use crate::core::{CandidateSet, Word};
use crate::solver::Scorer;
use anyhow::{Context, Result};

/// Result of analyzing one guess word
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Expected information gain in nats
    pub info_nats: f64,
    /// Number of distinct feedback buckets
    pub buckets: usize,
    /// Size of the largest bucket (worst-case remaining candidates)
    pub largest_bucket: usize,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
}

/// Analyze how `word` splits the answer vocabulary
///
/// # Errors
/// Returns an error if `word` is not a valid word.
pub fn analyze_word(word: &str, scorer: &Scorer, answers: &[Word]) -> Result<AnalysisResult> {
    let guess = Word::new(word)
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("invalid word {word:?}"))?;

    let candidates = CandidateSet::new(answers.iter().copied());
    let n = candidates.len() as f64;
    let partition = scorer.partitioner().partition(guess, &candidates);

    let mut info_nats = 0.0;
    let mut expected_remaining = 0.0;
    let mut largest_bucket = 0;
    for bucket in partition.values() {
        let size = bucket.len() as f64;
        info_nats += size / n * (n / size).ln();
        expected_remaining += size / n * size;
        largest_bucket = largest_bucket.max(bucket.len());
    }

    Ok(AnalysisResult {
        word: word.to_string(),
        total_candidates: candidates.len(),
        info_nats,
        buckets: partition.len(),
        largest_bucket,
        expected_remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    #[test]
    fn full_split_analysis() {
        let vocabulary = words(&["abcde", "abcdf", "abcxx"]);
        let scorer = Scorer::new(vocabulary.clone());

        let result = analyze_word("abcde", &scorer, &vocabulary).unwrap();

        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.buckets, 3);
        assert_eq!(result.largest_bucket, 1);
        assert!((result.info_nats - 3.0_f64.ln()).abs() < 1e-12);
        assert!((result.expected_remaining - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partial_split_analysis() {
        let vocabulary = words(&["abcde", "abcdf", "abcxx"]);
        let scorer = Scorer::new(vocabulary.clone());

        let result = analyze_word("abcxx", &scorer, &vocabulary).unwrap();

        // {abcde, abcdf} share a bucket; {abcxx} is alone
        assert_eq!(result.buckets, 2);
        assert_eq!(result.largest_bucket, 2);

        let expected_info = (1.0 / 3.0) * 3.0_f64.ln() + (2.0 / 3.0) * 1.5_f64.ln();
        assert!((result.info_nats - expected_info).abs() < 1e-12);

        let expected_remaining = (1.0 + 4.0) / 3.0;
        assert!((result.expected_remaining - expected_remaining).abs() < 1e-12);
    }

    #[test]
    fn words_outside_the_vocabulary_are_still_analyzable() {
        let vocabulary = words(&["abcde", "abcdf", "abcxx"]);
        let scorer = Scorer::new(vocabulary.clone());

        let result = analyze_word("zzzzz", &scorer, &vocabulary).unwrap();
        assert_eq!(result.buckets, 1);
        assert!(result.info_nats.abs() < 1e-12);
    }

    #[test]
    fn invalid_word_is_an_error() {
        let vocabulary = words(&["abcde"]);
        let scorer = Scorer::new(vocabulary.clone());
        assert!(analyze_word("bad!!", &scorer, &vocabulary).is_err());
    }
}
