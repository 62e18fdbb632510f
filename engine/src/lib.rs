//! nim Engine - Core decision types and logic
//!
//! This crate contains the board state, the arena-backed game tree, the
//! static position evaluator, the closed-form nim-sum strategy, alpha-beta
//! search and move extraction.
//!
//! The engine is platform-agnostic and has zero UI dependencies.

pub mod error;
pub mod evaluator;
pub mod extract;
pub mod node;
pub mod search;
pub mod state;
pub mod strategy;
#[doc(hidden)]
pub mod test_tree;

pub use error::{EngineError, Result};
pub use evaluator::{NimEvaluator, PositionEvaluator};
pub use node::{GameTree, Move, Node, NodeId, Score};
pub use state::{GameState, GameVariant};
pub use strategy::{NimSumStrategy, StrategyKind};
