//! Round optimizer - best-of-N random seating search
//!
//! Every trial is an independent uniform shuffle of the canonical label
//! sequence. There is no local improvement between trials.
//!
//! ## Architecture
//! - Level 2: optimize() - one round's search
//! - Level 3: draw_candidates(), score_candidates(), select_best()

use rand::seq::SliceRandom;
use rand::Rng;
use rayon::prelude::*;

use crate::assignment::RoundAssignment;
use crate::history::PairingHistory;
use crate::penalty::PenaltyEvaluator;

/// Default number of shuffles tried per round
pub const DEFAULT_TRIALS: usize = 1024;

/// Outcome of one round's search
#[derive(Clone, Debug)]
pub struct OptimizedRound {
    /// Winning assignment
    pub assignment: RoundAssignment,
    /// Its penalty
    pub penalty: f64,
    /// Trial that produced it (earliest among equal scores)
    pub trial: usize,
    /// Highest penalty seen among all trials
    pub worst_penalty: f64,
}

/// Best-of-N sampler over seatings
#[derive(Clone, Debug)]
pub struct RoundOptimizer {
    /// Shuffles per round
    pub trials: usize,
    /// Score candidates on the rayon pool
    pub parallel: bool,
    pub evaluator: PenaltyEvaluator,
}

impl Default for RoundOptimizer {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            parallel: true,
            evaluator: PenaltyEvaluator::default(),
        }
    }
}

impl RoundOptimizer {
    pub fn new(trials: usize, evaluator: PenaltyEvaluator) -> Self {
        Self {
            trials,
            evaluator,
            ..Default::default()
        }
    }

    /// Score on the calling thread only
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    // ========================================================================
    // Level 2 - Round search
    // ========================================================================

    /// Search for the lowest-penalty seating of one round.
    ///
    /// `history` is read only; the caller folds the winner in afterwards.
    /// Shuffles are drawn from `rng` in trial order before any scoring, so the
    /// result is the same whether scoring runs in parallel or not.
    ///
    /// # Panics
    /// Panics if `trials` is 0.
    pub fn optimize<R: Rng + ?Sized>(&self, history: &PairingHistory, rng: &mut R) -> OptimizedRound {
        assert!(self.trials > 0, "Trial count must be > 0");

        let canonical = RoundAssignment::canonical(history.layout());
        let candidates = draw_candidates(&canonical, self.trials, rng);
        let scores = self.score_candidates(&candidates, history);
        let (trial, penalty) = select_best(&scores);
        let worst_penalty = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        OptimizedRound {
            assignment: candidates[trial].clone(),
            penalty,
            trial,
            worst_penalty,
        }
    }

    // ========================================================================
    // Level 3 - Steps
    // ========================================================================

    /// Penalty of every candidate, in trial order
    pub fn score_candidates(&self, candidates: &[RoundAssignment], history: &PairingHistory) -> Vec<f64> {
        if self.parallel {
            candidates
                .par_iter()
                .map(|c| self.evaluator.score(c, history))
                .collect()
        } else {
            candidates
                .iter()
                .map(|c| self.evaluator.score(c, history))
                .collect()
        }
    }
}

/// Draw `trials` independent uniform permutations of `canonical`
pub fn draw_candidates<R: Rng + ?Sized>(
    canonical: &RoundAssignment,
    trials: usize,
    rng: &mut R,
) -> Vec<RoundAssignment> {
    (0..trials)
        .map(|_| {
            let mut candidate = canonical.clone();
            candidate.labels_mut().shuffle(rng);
            candidate
        })
        .collect()
}

/// Index and value of the lowest score; the earliest wins ties
fn select_best(scores: &[f64]) -> (usize, f64) {
    let mut best = (0, scores[0]);
    for (i, &score) in scores.iter().enumerate().skip(1) {
        if score < best.1 {
            best = (i, score);
        }
    }
    best
}
