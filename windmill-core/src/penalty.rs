//! Round assignment scoring

use serde::{Deserialize, Serialize};

use crate::assignment::RoundAssignment;
use crate::history::PairingHistory;
use crate::layout::SlotLayout;

/// Cost of two rotating slots sharing a table
pub const ROTATION_COLLISION_PENALTY: f64 = 1e9;

/// Cost per earlier pairing when an anchor sits with a rotating slot again
pub const CROSS_PAIRING_WEIGHT: f64 = 1e7;

/// Scores candidate assignments. Lower is better, zero means no violations.
///
/// Stateless: the score depends only on the assignment and the history
/// snapshot passed in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenaltyEvaluator {
    /// Added for every unordered pair of rotating slots at one table
    pub rotation_collision: f64,
    /// Multiplied by the anchor's history count for every anchor/rotating match
    pub cross_pairing: f64,
}

impl Default for PenaltyEvaluator {
    fn default() -> Self {
        Self {
            rotation_collision: ROTATION_COLLISION_PENALTY,
            cross_pairing: CROSS_PAIRING_WEIGHT,
        }
    }
}

impl PenaltyEvaluator {
    pub fn new(rotation_collision: f64, cross_pairing: f64) -> Self {
        Self {
            rotation_collision,
            cross_pairing,
        }
    }

    /// Total penalty of `assignment` given the pairings in `history`
    pub fn score(&self, assignment: &RoundAssignment, history: &PairingHistory) -> f64 {
        let layout = history.layout();
        let collisions = rotation_collisions(assignment, layout);
        let mut penalty = collisions as f64 * self.rotation_collision;

        for anchor in layout.anchors() {
            let table = assignment.table_of(anchor);
            let weight = history.count(anchor) as f64 * self.cross_pairing;
            for rotating in layout.rotating() {
                if assignment.table_of(rotating) == table {
                    penalty += weight;
                }
            }
        }

        penalty
    }
}

/// Number of unordered rotating-slot pairs that share a table
pub fn rotation_collisions(assignment: &RoundAssignment, layout: &SlotLayout) -> usize {
    let rotating = layout.rotating();
    let mut collisions = 0;
    for i in rotating.clone() {
        for j in (i + 1)..rotating.end {
            if assignment.table_of(i) == assignment.table_of(j) {
                collisions += 1;
            }
        }
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::TableLabel;

    fn assignment(s: &str) -> RoundAssignment {
        RoundAssignment::from_labels(s.chars().filter_map(TableLabel::from_char).collect())
    }

    #[test]
    fn test_clean_round_scores_zero() {
        let layout = SlotLayout::new(2, 3).unwrap();
        let history = PairingHistory::new(layout);
        let evaluator = PenaltyEvaluator::default();

        // rotating slots 4, 5 at different tables, no history yet
        assert_eq!(evaluator.score(&assignment("AABBAB"), &history), 0.0);
    }

    #[test]
    fn test_rotation_collision_term() {
        let layout = SlotLayout::new(2, 3).unwrap();
        let history = PairingHistory::new(layout);
        let evaluator = PenaltyEvaluator::default();

        let colliding = assignment("ABBBAA");
        assert_eq!(rotation_collisions(&colliding, &layout), 1);
        assert_eq!(evaluator.score(&colliding, &history), 1e9);
    }

    #[test]
    fn test_cross_pairing_term_uses_history() {
        let layout = SlotLayout::new(2, 3).unwrap();
        let mut history = PairingHistory::new(layout);
        history.record(&assignment("AABBAB"));
        history.record(&assignment("ABBBAA"));
        assert_eq!(history.counts(), &[3, 1, 1, 1]);

        let evaluator = PenaltyEvaluator::default();
        // slot 4 at A with 0, 1; slot 5 at B with 2, 3
        let score = evaluator.score(&assignment("AABBAB"), &history);
        assert_eq!(score, (3.0 + 1.0 + 1.0 + 1.0) * 1e7);
    }

    #[test]
    fn test_collision_dominates_history() {
        let layout = SlotLayout::new(2, 3).unwrap();
        let mut history = PairingHistory::new(layout);
        for _ in 0..8 {
            history.record(&assignment("AABBAB"));
        }
        let evaluator = PenaltyEvaluator::default();

        let clean = evaluator.score(&assignment("AABBAB"), &history);
        let colliding = evaluator.score(&assignment("ABBBAA"), &history);
        assert!(clean < colliding);
    }

    #[test]
    fn test_single_table_collisions_unavoidable() {
        let layout = SlotLayout::new(1, 6).unwrap();
        // 5 rotating slots at one table: C(5, 2) pairs
        assert_eq!(rotation_collisions(&assignment("AAAAAA"), &layout), 10);
    }

    #[test]
    fn test_score_is_pure() {
        let layout = SlotLayout::new(2, 3).unwrap();
        let mut history = PairingHistory::new(layout);
        history.record(&assignment("ABBBAA"));
        let before = history.clone();
        let candidate = assignment("BABABA");
        let evaluator = PenaltyEvaluator::default();

        let first = evaluator.score(&candidate, &history);
        let second = evaluator.score(&candidate, &history);
        assert_eq!(first, second);
        assert_eq!(history, before);
        assert_eq!(candidate, assignment("BABABA"));
    }
}
