//! Error types for the decision engine

use crate::node::Score;

/// Errors raised by the decision engine.
///
/// Falling back to a random move is policy, not an error, and never shows up here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The move removes nothing, or more objects than the pile holds
    #[error("invalid move: cannot remove {amount} from pile {pile}")]
    InvalidMove { pile: usize, amount: u32 },

    /// A decision was requested on a board with no objects left
    #[error("game is over, no objects remain")]
    GameOver,

    /// The board has no piles at all
    #[error("board has no piles")]
    EmptyBoard,

    /// No child of the root carries the value the search returned
    #[error("search returned {value} but no root child carries that score")]
    SearchInconsistency { value: Score },
}

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, EngineError>;
