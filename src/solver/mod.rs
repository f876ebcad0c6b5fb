//! The scoring engine
//!
//! Feedback memoization, candidate-set partitioning, and recursive
//! expected-information scoring.

mod codec;
mod partition;
mod scorer;

pub use codec::FeedbackCodec;
pub use partition::{Partition, Partitioner};
pub use scorer::{DEFAULT_DEPTH_LIMIT, ScoreTable, Scorer};
