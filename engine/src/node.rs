//! Node definitions for the game tree
//!
//! This module defines the core Node type that represents one reachable board
//! in the Nim game tree. Nodes live in a flat arena owned by [`GameTree`] and
//! refer to each other by [`NodeId`], so the whole tree is released in one go
//! when the `GameTree` is dropped.

use std::fmt;

use crate::state::label;

/// Static evaluation score of a position
pub type Score = i32;

/// Node ID type (index into flat array storage)
pub type NodeId = u32;

/// Score of a board with no objects left
pub const SCORE_WIN: Score = 100;

/// Score of a balanced board (nim-sum zero for the player about to move)
pub const SCORE_BALANCED: Score = 50;

/// Score of every other board, also the root's sentinel score
pub const SCORE_LOSS: Score = Score::MIN;

/// A single move: remove `amount` objects from the pile at `pile`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Zero-based pile index
    pub pile: usize,
    /// Number of objects to remove (at least 1)
    pub amount: u32,
}

impl Move {
    /// Create a new move
    pub fn new(pile: usize, amount: u32) -> Self {
        Move { pile, amount }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "remove {} from pile {}", self.amount, self.pile + 1)
    }
}

/// Represents a node in the game tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique identifier for this node (index in flat array)
    pub id: NodeId,
    /// Parent node ID (None for root)
    pub parent: Option<NodeId>,
    /// Pile sizes after the move leading here
    pub piles: Vec<u32>,
    /// Static evaluation of `piles`
    pub score: Score,
    /// Child node IDs in insertion order
    pub children: Vec<NodeId>,
}

impl Node {
    /// Display label derived from the pile sizes, e.g. `1-3-5-7`
    pub fn label(&self) -> String {
        label(&self.piles)
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Game tree wrapper
///
/// Contains a flat array of nodes for efficient traversal and cache locality.
/// Node 0 is the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTree {
    /// Flat array of nodes indexed by NodeId
    pub nodes: Vec<Node>,
}

impl GameTree {
    /// Create a tree holding only a root node
    pub fn with_root(piles: Vec<u32>, score: Score) -> Self {
        GameTree {
            nodes: vec![Node {
                id: 0,
                parent: None,
                piles,
                score,
                children: Vec::new(),
            }],
        }
    }

    /// ID of the root node
    pub fn root_id(&self) -> NodeId {
        0
    }

    /// The root node
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    /// Append a child under `parent` and return its ID
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, piles: Vec<u32>, score: Score) -> NodeId {
        let id = self.nodes.len() as NodeId;
        log::trace!("creating node {} ({})", id, label(&piles));
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            piles,
            score,
            children: Vec::new(),
        });
        self.nodes[parent as usize].children.push(id);
        id
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Iterate over the direct children of a node
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &Node> + '_ {
        self.nodes[id as usize]
            .children
            .iter()
            .map(move |&child| &self.nodes[child as usize])
    }

    /// Total number of nodes, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes created by expansion (root excluded)
    pub fn expanded(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Check if the tree holds nothing but the root
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }
}

impl Drop for GameTree {
    fn drop(&mut self) {
        if !self.nodes.is_empty() {
            log::debug!("releasing game tree of {} nodes", self.nodes.len());
        }
    }
}
