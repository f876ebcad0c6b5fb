//! Command implementations

pub mod advise;
pub mod analyze;
pub mod solve;

pub use advise::run_advise;
pub use analyze::{AnalysisResult, analyze_word};
pub use solve::{RoundStep, SolveConfig, SolveResult, solve_word};
