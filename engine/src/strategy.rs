//! Closed-form nim-sum strategy
//!
//! A position with a non-zero nim-sum always has a reply that leaves the
//! opponent a zero nim-sum. Misère play follows the same rule until the
//! endgame, where only the parity of the remaining singleton piles matters.
//! When no winning reply exists a uniformly random legal move is played.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{EngineError, Result};
use crate::node::Move;
use crate::state::{is_endgame, is_terminal, GameVariant};

/// Which decision path produces the computer's move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyKind {
    /// Closed-form nim-sum rule
    #[default]
    NimSum,
    /// Game tree expansion searched with alpha-beta pruning
    AlphaBeta,
}

/// Pick a non-empty pile uniformly, then an amount uniformly in `[1, pile]`.
///
/// Returns `None` on a terminal board.
pub fn random_move<R: Rng + ?Sized>(piles: &[u32], rng: &mut R) -> Option<Move> {
    let candidates: Vec<usize> = piles
        .iter()
        .enumerate()
        .filter(|(_, &pile)| pile > 0)
        .map(|(idx, _)| idx)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    let pile = candidates[rng.random_range(0..candidates.len())];
    let amount = rng.random_range(1..=piles[pile]);
    Some(Move::new(pile, amount))
}

/// First pile that can be reduced to `pile ^ nim_sum`
fn reducing_move(piles: &[u32], nim_sum: u32) -> Option<Move> {
    piles.iter().enumerate().find_map(|(idx, &pile)| {
        let target = pile ^ nim_sum;
        (target < pile).then(|| Move::new(idx, pile - target))
    })
}

/// Misère endgame: leave an odd number of singleton piles
fn misere_endgame_move(piles: &[u32]) -> Option<Move> {
    let moves_left = piles.iter().filter(|&&pile| pile > 0).count();
    let is_odd = moves_left % 2 == 1;

    // First pile holding the maximum
    let (idx, &pile_max) = piles
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|(_, &pile)| pile)?;

    if pile_max == 0 || (is_odd && pile_max == 1) {
        return None;
    }
    Some(Move::new(idx, pile_max - u32::from(is_odd)))
}

/// The winning move for `piles`, if one exists
///
/// `nim_sum` is the board's current nim-sum, passed in because the caller
/// already displays it.
pub fn winning_move(piles: &[u32], variant: GameVariant, nim_sum: u32) -> Option<Move> {
    match variant {
        GameVariant::Misere if is_endgame(piles) => misere_endgame_move(piles),
        GameVariant::Normal | GameVariant::Misere => reducing_move(piles, nim_sum),
    }
}

/// Nim-sum strategy with its own random source for the fallback
#[derive(Debug, Clone)]
pub struct NimSumStrategy<R = StdRng> {
    rng: R,
}

impl NimSumStrategy<StdRng> {
    /// Strategy whose fallback moves are reproducible from `seed`
    pub fn seeded(seed: u64) -> Self {
        NimSumStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Strategy seeded from the operating system
    pub fn from_entropy() -> Self {
        NimSumStrategy {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl<R: Rng> NimSumStrategy<R> {
    /// Wrap an existing random source
    pub fn with_rng(rng: R) -> Self {
        NimSumStrategy { rng }
    }

    /// Produce a legal move, falling back to a random one when no winning
    /// move exists
    pub fn next_move(&mut self, piles: &[u32], variant: GameVariant, nim_sum: u32) -> Result<Move> {
        if is_terminal(piles) {
            return Err(EngineError::GameOver);
        }
        if let Some(m) = winning_move(piles, variant, nim_sum) {
            return Ok(m);
        }
        log::debug!("no winning move from {:?}, generating random move", piles);
        random_move(piles, &mut self.rng).ok_or(EngineError::GameOver)
    }
}
