//! Recover the concrete move behind a searched value

use crate::error::{EngineError, Result};
use crate::node::{GameTree, Move, Score};

/// Move leading from `current` to the first root child scored `target`.
///
/// Ties go to the first child in insertion order; other equally scored
/// children are never considered.
pub fn extract_move(tree: &GameTree, target: Score, current: &[u32]) -> Result<Move> {
    let child = tree
        .children(tree.root_id())
        .find(|child| child.score == target)
        .ok_or(EngineError::SearchInconsistency { value: target })?;

    current
        .iter()
        .zip(&child.piles)
        .enumerate()
        .find(|(_, (before, after))| before != after)
        .and_then(|(pile, (&before, &after))| {
            before
                .checked_sub(after)
                .filter(|&amount| amount > 0)
                .map(|amount| Move::new(pile, amount))
        })
        .ok_or(EngineError::SearchInconsistency { value: target })
}
