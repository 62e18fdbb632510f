//! Hand-built score trees for search validation and benchmarks
//!
//! Piles are left empty: the search only reads scores and children.
//!
//! Pruning tree structure (scores in parentheses):
//!   0: root (0)            [1, 4, 7]
//!   1: min node (7)        [2, 3]
//!   2: leaf (3)
//!   3: leaf (5)
//!   4: min node (4)        [5, 6]
//!   5: leaf (2)
//!   6: leaf (9)
//!   7: min node (1)        [8, 9]
//!   8: leaf (0)
//!   9: leaf (1)

use crate::node::{GameTree, Score};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Build the 10-node pruning tree.
/// Nodes are pushed depth-first so the IDs match the diagram above.
pub fn build_pruning_tree() -> GameTree {
    let mut tree = GameTree::with_root(Vec::new(), 0);
    for (inner, leaves) in [(7, [3, 5]), (4, [2, 9]), (1, [0, 1])] {
        let id = tree.add_child(0, Vec::new(), inner);
        for leaf in leaves {
            tree.add_child(id, Vec::new(), leaf);
        }
    }
    tree
}

/// Two-ply tree whose leaves are `leaves`, grouped `branching` per inner node.
/// Inner nodes score 0.
pub fn build_score_tree(leaves: &[Score], branching: usize) -> GameTree {
    let mut tree = GameTree::with_root(Vec::new(), 0);
    for group in leaves.chunks(branching.max(1)) {
        let id = tree.add_child(0, Vec::new(), 0);
        for &leaf in group {
            tree.add_child(id, Vec::new(), leaf);
        }
    }
    tree
}

/// Uniform tree of the given depth and branching factor with scores drawn
/// from a fixed LCG, for benchmarks
pub fn build_uniform_tree(depth: u32, branching: usize, seed: u64) -> GameTree {
    fn grow(tree: &mut GameTree, parent: u32, depth: u32, branching: usize, state: &mut u64) {
        if depth == 0 {
            return;
        }
        for _ in 0..branching {
            *state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let score = ((*state >> 33) % 201) as Score - 100;
            let id = tree.add_child(parent, Vec::new(), score);
            grow(tree, id, depth - 1, branching, state);
        }
    }

    let mut tree = GameTree::with_root(Vec::new(), 0);
    let mut state = seed;
    grow(&mut tree, 0, depth, branching, &mut state);
    tree
}

/// Random score tree of depth at most 4 for property tests
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScoreTree(pub GameTree);

#[cfg(test)]
fn arbitrary_score(g: &mut Gen) -> Score {
    match u8::arbitrary(g) % 10 {
        0 => Score::MIN,
        1 => Score::MAX,
        _ => i32::arbitrary(g) % 21,
    }
}

#[cfg(test)]
fn grow_arbitrary(tree: &mut GameTree, g: &mut Gen, parent: u32, depth: u32) {
    if depth == 0 {
        return;
    }
    let branching = usize::arbitrary(g) % 4;
    for _ in 0..branching {
        let id = tree.add_child(parent, Vec::new(), arbitrary_score(g));
        grow_arbitrary(tree, g, id, depth - 1);
    }
}

#[cfg(test)]
impl Arbitrary for ScoreTree {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut tree = GameTree::with_root(Vec::new(), arbitrary_score(g));
        let depth = u32::arbitrary(g) % 5;
        grow_arbitrary(&mut tree, g, 0, depth);
        ScoreTree(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pruning_tree_node_count() {
        let tree = build_pruning_tree();
        assert_eq!(tree.len(), 10);
    }

    #[test]
    fn test_pruning_tree_layout() {
        let tree = build_pruning_tree();
        assert_eq!(tree.root().children, vec![1, 4, 7]);
        let scores: Vec<Score> = tree.nodes.iter().map(|n| n.score).collect();
        assert_eq!(scores, vec![0, 7, 3, 5, 4, 2, 9, 1, 0, 1]);
    }

    #[test]
    fn test_all_children_valid() {
        let tree = build_uniform_tree(3, 3, 1);
        for node in &tree.nodes {
            for &child_id in &node.children {
                assert!(
                    tree.get(child_id).is_some(),
                    "child id {} is out of bounds",
                    child_id
                );
                assert_eq!(tree.get(child_id).unwrap().parent, Some(node.id));
            }
        }
    }

    #[test]
    fn test_uniform_tree_size() {
        // 1 + 3 + 9 + 27
        assert_eq!(build_uniform_tree(3, 3, 1).len(), 40);
    }

    #[test]
    fn test_score_tree_groups() {
        let tree = build_score_tree(&[1, 2, 3, 4, 5], 2);
        assert_eq!(tree.root().children.len(), 3);
        assert_eq!(tree.len(), 9);
    }
}
