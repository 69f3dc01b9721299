//! Exhaustive minimax over a built tree

use crate::tree::{GameTree, NodeId};

/// Back up values from `depth` plies below `node` without pruning.
///
/// Every visited node gets its value stored in the tree and bumps `visited`.
/// Terminal states, nodes at the depth horizon, and nodes the tree was not
/// expanded past are scored with the static heuristic.
pub fn minimax(
    tree: &mut GameTree,
    node: NodeId,
    maximizing: bool,
    depth: u32,
    visited: &mut u64,
) -> i32 {
    *visited += 1;

    let state = *tree.node(node).state();
    let child_count = tree.node(node).children().len();
    if state.is_terminal() || depth == 0 || child_count == 0 {
        let value = state.heuristic_value();
        tree.set_value(node, value);
        return value;
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in 0..child_count {
        let child = tree.child_at(node, index);
        let value = minimax(tree, child, !maximizing, depth - 1, visited);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    tree.set_value(node, best);
    best
}
