//! Minimax search with alpha-beta pruning over a built [`GameTree`]
//!
//! Scores stored on the nodes are static; the search only decides which of
//! them is reachable under best play from both sides. Pruning never changes
//! the returned value, only the number of nodes visited.

use crate::node::{GameTree, NodeId, Score};

/// Work done by one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose value was requested, root included
    pub visited: u64,
    /// Sibling lists abandoned early
    pub cutoffs: u64,
}

/// Alpha-beta search over a borrowed tree
pub struct AlphaBeta<'a> {
    tree: &'a GameTree,
    stats: SearchStats,
}

impl<'a> AlphaBeta<'a> {
    /// Search `tree` with zeroed statistics
    pub fn new(tree: &'a GameTree) -> Self {
        AlphaBeta {
            tree,
            stats: SearchStats::default(),
        }
    }

    /// Value of the root searched to `depth` plies with the full window
    pub fn search_root(&mut self, depth: u32) -> Score {
        self.search(self.tree.root_id(), depth, Score::MIN, Score::MAX, true)
    }

    /// Value of `node` searched to `depth` plies inside `(alpha, beta)`
    pub fn search(
        &mut self,
        node: NodeId,
        depth: u32,
        alpha: Score,
        beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.visited += 1;
        let tree = self.tree;
        let current = &tree.nodes[node as usize];

        if depth == 0 || current.children.is_empty() {
            return current.score;
        }

        if maximizing {
            let mut best = alpha;
            for &child in &current.children {
                let value = self.search(child, depth - 1, best, beta, false);
                best = best.max(value);
                if beta <= best {
                    log::debug!("cutoff: {}", tree.nodes[child as usize].label());
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = beta;
            for &child in &current.children {
                let value = self.search(child, depth - 1, alpha, best, true);
                best = best.min(value);
                if best <= alpha {
                    log::debug!("cutoff: {}", tree.nodes[child as usize].label());
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Work done by every search call so far
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Alpha-beta value of `node` to `depth` plies
pub fn alpha_beta(
    tree: &GameTree,
    node: NodeId,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizing: bool,
) -> Score {
    AlphaBeta::new(tree).search(node, depth, alpha, beta, maximizing)
}

/// Plain minimax value of `node` to `depth` plies, every node visited
pub fn minimax(tree: &GameTree, node: NodeId, depth: u32, maximizing: bool) -> Score {
    let current = &tree.nodes[node as usize];
    if depth == 0 || current.children.is_empty() {
        return current.score;
    }
    let values = current
        .children
        .iter()
        .map(|&child| minimax(tree, child, depth - 1, !maximizing));
    let best = if maximizing { values.max() } else { values.min() };
    best.unwrap_or(current.score)
}
