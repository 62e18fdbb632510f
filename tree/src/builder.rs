//! Game tree construction
//!
//! Expands a board into every position reachable within a fixed number of
//! plies. The branching factor at a node equals the number of objects left on
//! its board, so tree size grows combinatorially with pile sizes and depth.

use nim_engine::node::{GameTree, NodeId, SCORE_LOSS};
use nim_engine::PositionEvaluator;

/// Builds game trees, scoring every node as it is created
pub struct GameTreeBuilder<'e, E> {
    evaluator: &'e E,
}

impl<'e, E: PositionEvaluator> GameTreeBuilder<'e, E> {
    pub fn new(evaluator: &'e E) -> Self {
        GameTreeBuilder { evaluator }
    }

    /// Build the tree rooted at `piles`, expanded `depth` plies deep.
    ///
    /// The root carries the sentinel score [`SCORE_LOSS`]. Children are
    /// ordered by pile index, then by amount removed from largest to smallest.
    pub fn build(&self, piles: &[u32], depth: u32) -> GameTree {
        let mut tree = GameTree::with_root(piles.to_vec(), SCORE_LOSS);
        let root = tree.root_id();
        self.expand(&mut tree, root, depth);
        log::debug!(
            "built tree from {} to depth {}: {} nodes",
            tree.root().label(),
            depth,
            tree.expanded()
        );
        tree
    }

    fn expand(&self, tree: &mut GameTree, parent: NodeId, depth: u32) {
        if depth == 0 {
            return;
        }
        let piles = tree.nodes[parent as usize].piles.clone();
        for (idx, &size) in piles.iter().enumerate() {
            for remove in (1..=size).rev() {
                let mut next = piles.clone();
                next[idx] -= remove;
                debug_assert!(next.iter().sum::<u32>() < piles.iter().sum::<u32>());
                let score = self.evaluator.evaluate(&next);
                let child = tree.add_child(parent, next, score);
                self.expand(tree, child, depth - 1);
            }
        }
    }
}

/// Build a tree with a one-off builder
pub fn build_tree<E: PositionEvaluator>(evaluator: &E, piles: &[u32], depth: u32) -> GameTree {
    GameTreeBuilder::new(evaluator).build(piles, depth)
}
