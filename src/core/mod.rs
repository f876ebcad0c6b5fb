//! Core domain types for the advisor
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod candidates;
mod feedback;
mod word;

pub use candidates::CandidateSet;
pub use feedback::{FEEDBACK_COUNT, Feedback};
pub use word::{WORD_LEN, Word, WordError};
