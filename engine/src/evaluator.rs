//! Static position evaluator
//!
//! Scores a board from the point of view of the player who just produced it.
//! The evaluator never looks ahead; all depth comes from tree expansion.

use crate::node::{Score, SCORE_BALANCED, SCORE_LOSS, SCORE_WIN};
use crate::state::{is_terminal, nim_sum, GameVariant};

/// Position evaluator trait
///
/// Called once per node while the tree is built. Implementations must be
/// pure: the same piles always give the same score.
pub trait PositionEvaluator {
    /// Score `piles` for the player who just moved
    fn evaluate(&self, piles: &[u32]) -> Score;
}

/// Nim-sum evaluator with the three fixed scores
#[derive(Debug, Clone, Copy, Default)]
pub struct NimEvaluator {
    variant: GameVariant,
}

impl NimEvaluator {
    /// Create an evaluator for the given variant
    pub fn new(variant: GameVariant) -> Self {
        NimEvaluator { variant }
    }

    /// Variant the scores are computed for
    pub fn variant(&self) -> GameVariant {
        self.variant
    }

    fn evaluate_normal(piles: &[u32]) -> Score {
        if is_terminal(piles) {
            SCORE_WIN
        } else if nim_sum(piles) == 0 {
            SCORE_BALANCED
        } else {
            SCORE_LOSS
        }
    }

    // Misère P-positions: only singletons left and an odd number of them,
    // or some pile of 2+ and nim-sum zero.
    fn evaluate_misere(piles: &[u32]) -> Score {
        if is_terminal(piles) {
            return SCORE_LOSS;
        }
        let only_singletons = piles.iter().all(|&pile| pile <= 1);
        let balanced = if only_singletons {
            piles.iter().filter(|&&pile| pile == 1).count() % 2 == 1
        } else {
            nim_sum(piles) == 0
        };
        if balanced {
            SCORE_BALANCED
        } else {
            SCORE_LOSS
        }
    }
}

impl PositionEvaluator for NimEvaluator {
    fn evaluate(&self, piles: &[u32]) -> Score {
        match self.variant {
            GameVariant::Normal => Self::evaluate_normal(piles),
            GameVariant::Misere => Self::evaluate_misere(piles),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_terminal_is_win() {
        let eval = NimEvaluator::new(GameVariant::Normal);
        assert_eq!(eval.evaluate(&[0, 0, 0, 0]), SCORE_WIN);
    }

    #[test]
    fn test_normal_balanced_board() {
        let eval = NimEvaluator::new(GameVariant::Normal);
        assert_eq!(eval.evaluate(&[1, 3, 5, 7]), SCORE_BALANCED);
        assert_eq!(eval.evaluate(&[0, 3, 5, 6]), SCORE_BALANCED);
    }

    #[test]
    fn test_normal_unbalanced_board() {
        let eval = NimEvaluator::new(GameVariant::Normal);
        assert_eq!(eval.evaluate(&[1, 3, 5, 6]), SCORE_LOSS);
        assert_eq!(eval.evaluate(&[0, 0, 1, 0]), SCORE_LOSS);
    }

    #[test]
    fn test_score_ordering() {
        assert!(SCORE_WIN > SCORE_BALANCED);
        assert!(SCORE_BALANCED > SCORE_LOSS);
    }

    #[test]
    fn test_misere_taking_last_loses() {
        let eval = NimEvaluator::new(GameVariant::Misere);
        assert_eq!(eval.evaluate(&[0, 0, 0]), SCORE_LOSS);
    }

    #[test]
    fn test_misere_singleton_parity() {
        let eval = NimEvaluator::new(GameVariant::Misere);
        assert_eq!(eval.evaluate(&[0, 0, 1, 0]), SCORE_BALANCED);
        assert_eq!(eval.evaluate(&[1, 0, 1, 0]), SCORE_LOSS);
        assert_eq!(eval.evaluate(&[1, 1, 1, 0]), SCORE_BALANCED);
    }

    #[test]
    fn test_misere_large_piles_follow_nim_sum() {
        let eval = NimEvaluator::new(GameVariant::Misere);
        assert_eq!(eval.evaluate(&[1, 3, 5, 7]), SCORE_BALANCED);
        assert_eq!(eval.evaluate(&[2, 2, 0, 0]), SCORE_BALANCED);
        assert_eq!(eval.evaluate(&[1, 3, 5, 6]), SCORE_LOSS);
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(NimEvaluator::default().variant(), GameVariant::Normal);
    }
}
