//! Round-by-round advisor session
//!
//! Pure state machine over rounds: score the current candidates, recommend a
//! guess, narrow by observed feedback, repeat. All terminal I/O lives in the
//! command layer; this module never prompts or prints.

use crate::core::{CandidateSet, Feedback, Word};
use crate::solver::Scorer;

/// Where a session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// More than one candidate remains
    Open,
    /// Exactly one candidate remains: the answer
    Solved(Word),
    /// No candidate is consistent with the observed feedback
    Exhausted,
}

/// A scored recommendation for the current round
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// The best guess under the ranking policy
    pub guess: Word,
    /// Its expected-information score in nats
    pub score: f64,
    /// The full guess vocabulary, best first
    pub ranking: Vec<(Word, f64)>,
}

/// One advisor session over a fixed scorer
///
/// Candidate sets are immutable; each round's narrowing produces a new set
/// and the previous ones are kept for `undo`.
pub struct Session<'a> {
    scorer: &'a Scorer,
    candidates: CandidateSet,
    initial: CandidateSet,
    previous: Vec<CandidateSet>,
    round: u32,
    depth: usize,
}

impl<'a> Session<'a> {
    /// Start a session with the full answer vocabulary as candidates
    #[must_use]
    pub fn new(scorer: &'a Scorer, answers: impl IntoIterator<Item = Word>, depth: usize) -> Self {
        let initial = CandidateSet::new(answers);
        Self {
            scorer,
            candidates: initial.clone(),
            initial,
            previous: Vec::new(),
            round: 1,
            depth,
        }
    }

    /// Current round number, starting at 1
    #[must_use]
    pub const fn round(&self) -> u32 {
        self.round
    }

    /// The candidates still consistent with all observed feedback
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Configured lookahead depth
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Terminal classification of the current candidate set
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.candidates.single() {
            Some(answer) => SessionState::Solved(answer),
            None if self.candidates.is_empty() => SessionState::Exhausted,
            None => SessionState::Open,
        }
    }

    /// Recommend a guess for the current round
    ///
    /// Returns `None` once the session is terminal. The ranking is descending
    /// by (score, word): equal scores tie-break to the lexicographically
    /// greatest word. That tie-break is the reference policy kept for
    /// reproducibility, not a semantic requirement.
    #[must_use]
    pub fn recommend(&self) -> Option<Recommendation> {
        self.recommend_with_progress(&|| {})
    }

    /// `recommend`, forwarding a per-guess progress tick to the scorer
    #[must_use]
    pub fn recommend_with_progress<F: Fn() + Sync>(&self, tick: &F) -> Option<Recommendation> {
        if self.state() != SessionState::Open {
            return None;
        }

        let table = self
            .scorer
            .score_with_progress(&self.candidates, self.depth, tick);

        let mut ranking: Vec<(Word, f64)> = table.iter().map(|(&w, &s)| (w, s)).collect();
        ranking.sort_unstable_by(|a, b| b.1.total_cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

        let &(guess, score) = ranking.first()?;
        Some(Recommendation {
            guess,
            score,
            ranking,
        })
    }

    /// Narrow the candidates to those consistent with `feedback` for `guess`
    ///
    /// A feedback code no candidate would produce (contradictory input, or an
    /// answer outside the answer vocabulary) leaves the empty set and the
    /// session lands on the Exhausted terminal.
    pub fn apply(&mut self, guess: Word, feedback: Feedback) {
        let partition = self.scorer.partitioner().partition(guess, &self.candidates);
        let narrowed = partition
            .get(&feedback)
            .cloned()
            .unwrap_or_else(CandidateSet::empty);

        self.previous
            .push(std::mem::replace(&mut self.candidates, narrowed));
        self.round += 1;
    }

    /// Revert the most recent `apply`; returns false when at round 1
    pub fn undo(&mut self) -> bool {
        match self.previous.pop() {
            Some(prior) => {
                self.candidates = prior;
                self.round -= 1;
                true
            }
            None => false,
        }
    }

    /// Restart from the full answer vocabulary
    pub fn reset(&mut self) {
        self.candidates = self.initial.clone();
        self.previous.clear();
        self.round = 1;
    }
}
