//! nim Tree Builder - Game tree construction and move decisions
//!
//! This crate builds game trees from a board and a ply depth, and sequences
//! the engine's pieces into one decision per turn: either the closed-form
//! nim-sum rule, or build → alpha-beta search → move extraction.

pub mod ai;
pub mod builder;

pub use ai::{EngineConfig, NimAi};
pub use builder::{build_tree, GameTreeBuilder};
