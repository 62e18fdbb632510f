//! Board state: pile sizes and the tests derived from them

use std::fmt;

use crate::error::{EngineError, Result};
use crate::node::Move;

/// Which player wins on taking the last object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameVariant {
    /// Taking the last object wins
    #[default]
    Normal,
    /// Taking the last object loses
    Misere,
}

/// Bit-wise XOR of all pile sizes
pub fn nim_sum(piles: &[u32]) -> u32 {
    piles.iter().fold(0, |acc, &pile| acc ^ pile)
}

/// True iff no objects remain
pub fn is_terminal(piles: &[u32]) -> bool {
    piles.iter().all(|&pile| pile == 0)
}

/// True iff at most one pile holds two or more objects
pub fn is_endgame(piles: &[u32]) -> bool {
    piles.iter().filter(|&&pile| pile > 1).count() <= 1
}

/// Label a pile collection, e.g. `1-3-5-7`
pub fn label(piles: &[u32]) -> String {
    piles
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

/// Snapshot of the board for one turn
///
/// Piles are never removed, only emptied, so indices stay stable for the
/// whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    piles: Vec<u32>,
}

impl GameState {
    /// Create a board from pile sizes
    pub fn new(piles: Vec<u32>) -> Result<Self> {
        if piles.is_empty() {
            return Err(EngineError::EmptyBoard);
        }
        Ok(GameState { piles })
    }

    /// Pile sizes in index order
    pub fn piles(&self) -> &[u32] {
        &self.piles
    }

    /// Bit-wise XOR of the pile sizes
    pub fn nim_sum(&self) -> u32 {
        nim_sum(&self.piles)
    }

    /// True iff no objects remain
    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.piles)
    }

    /// True iff at most one pile holds two or more objects
    pub fn is_endgame(&self) -> bool {
        is_endgame(&self.piles)
    }

    /// Size of the largest pile
    pub fn max_pile(&self) -> u32 {
        self.piles.iter().copied().max().unwrap_or(0)
    }

    /// Number of piles that still hold objects
    pub fn moves_left(&self) -> usize {
        self.piles.iter().filter(|&&pile| pile > 0).count()
    }

    /// Check a move against the current board without applying it
    pub fn is_valid_move(&self, m: &Move) -> bool {
        match self.piles.get(m.pile) {
            Some(&pile) => m.amount >= 1 && m.amount <= pile,
            None => false,
        }
    }

    /// Apply a legal move; illegal moves leave the board untouched
    pub fn apply(&mut self, m: &Move) -> Result<()> {
        if !self.is_valid_move(m) {
            return Err(EngineError::InvalidMove {
                pile: m.pile,
                amount: m.amount,
            });
        }
        self.piles[m.pile] -= m.amount;
        Ok(())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&label(&self.piles))
    }
}
