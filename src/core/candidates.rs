//! Candidate answer sets
//!
//! A `CandidateSet` holds the answers still consistent with all feedback
//! observed so far. Its canonical form is a lexicographically sorted,
//! deduplicated shared slice: equal sets compare and hash equally no matter
//! how they were assembled, which makes them usable as memo-cache keys, and
//! cloning is an `Arc` bump.

use super::word::Word;
use std::fmt;
use std::sync::Arc;

/// An immutable, duplicate-free, canonically ordered set of candidate answers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    words: Arc<[Word]>,
}

impl CandidateSet {
    /// Build a candidate set from any collection of words
    ///
    /// Sorts and deduplicates, so two sets with the same members are equal
    /// regardless of input order.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{CandidateSet, Word};
    ///
    /// let a = CandidateSet::new([Word::new("slate").unwrap(), Word::new("crane").unwrap()]);
    /// let b = CandidateSet::new([Word::new("crane").unwrap(), Word::new("slate").unwrap()]);
    /// assert_eq!(a, b);
    /// assert_eq!(a.len(), 2);
    /// ```
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<Word> = words.into_iter().collect();
        words.sort_unstable();
        words.dedup();
        Self {
            words: words.into(),
        }
    }

    /// Build from a vector already sorted and deduplicated
    ///
    /// Used by the partitioner: iterating a canonical set in order yields
    /// buckets that are already canonical.
    #[must_use]
    pub(crate) fn from_sorted(words: Vec<Word>) -> Self {
        debug_assert!(words.is_sorted());
        debug_assert!(words.windows(2).all(|pair| pair[0] != pair[1]));
        Self {
            words: words.into(),
        }
    }

    /// The empty candidate set
    #[must_use]
    pub fn empty() -> Self {
        Self {
            words: Arc::from([]),
        }
    }

    /// Number of candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no candidates remain
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The candidates in canonical (lexicographic) order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The sole remaining candidate, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<Word> {
        match self.words.as_ref() {
            [only] => Some(*only),
            _ => None,
        }
    }

    /// Membership test (binary search over the canonical order)
    #[must_use]
    pub fn contains(&self, word: Word) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    /// Iterate the candidates in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.words.iter().copied()
    }
}

impl fmt::Display for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{word}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter)
    }
}
