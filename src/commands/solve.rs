//! Self-play against a known target
//!
//! Plays the advisor's own recommendations against a given answer and records
//! the solution path.

use crate::core::{Feedback, Word};
use crate::session::{Session, SessionState};
use crate::solver::Scorer;
use anyhow::{Context, Result};

/// Configuration for a self-play run
pub struct SolveConfig {
    pub target: String,
    pub max_rounds: usize,
    pub depth: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String, depth: usize) -> Self {
        Self {
            target,
            max_rounds: 6,
            depth,
        }
    }
}

/// Result of a self-play run
pub struct SolveResult {
    pub success: bool,
    pub rounds: Vec<RoundStep>,
    pub target: String,
}

/// A single round in the solution path
pub struct RoundStep {
    pub word: String,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected-information score of the guess, absent for the forced final
    /// guess once only one candidate remained
    pub score: Option<f64>,
}

/// Play the advisor against `target`, recording each round
///
/// # Errors
/// Returns an error if the target is not a valid word.
pub fn solve_word(config: &SolveConfig, scorer: &Scorer, answers: &[Word]) -> Result<SolveResult> {
    let target = Word::new(config.target.as_str())
        .map_err(|e| anyhow::anyhow!(e))
        .with_context(|| format!("invalid target word {:?}", config.target))?;

    let mut session = Session::new(scorer, answers.iter().copied(), config.depth);
    let mut rounds = Vec::new();
    let mut success = false;

    for _ in 0..config.max_rounds {
        match session.state() {
            SessionState::Solved(answer) => {
                // One candidate left: guess it outright
                let feedback = Feedback::compute(answer, target);
                success = feedback.is_perfect();
                rounds.push(RoundStep {
                    word: answer.text().to_string(),
                    feedback,
                    candidates_before: 1,
                    candidates_after: usize::from(success),
                    score: None,
                });
                break;
            }
            SessionState::Exhausted => break,
            SessionState::Open => {}
        }

        let Some(rec) = session.recommend() else {
            break;
        };

        let candidates_before = session.candidates().len();
        let feedback = Feedback::compute(rec.guess, target);
        session.apply(rec.guess, feedback);

        rounds.push(RoundStep {
            word: rec.guess.text().to_string(),
            feedback,
            candidates_before,
            candidates_after: session.candidates().len(),
            score: Some(rec.score),
        });

        if feedback.is_perfect() {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        rounds,
        target: config.target.clone(),
    })
}
