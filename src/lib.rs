//! Word Advisor
//!
//! An interactive word-guessing advisor: recommends, each round, the guess
//! that maximizes expected information gain over the remaining candidate
//! answers, narrows the candidates from observed feedback, and repeats until
//! the answer is determined.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{CandidateSet, Feedback, Word};
//! use wordle_advisor::solver::Scorer;
//!
//! let vocabulary = vec![
//!     Word::new("crane").unwrap(),
//!     Word::new("slate").unwrap(),
//! ];
//! let candidates: CandidateSet = vocabulary.iter().copied().collect();
//!
//! let scorer = Scorer::new(vocabulary);
//! let scores = scorer.score(&candidates, 1);
//! assert_eq!(scores.len(), 2);
//! ```

// Core domain types
pub mod core;

// The scoring engine
pub mod solver;

// Round-by-round session state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
