//! Minimax with alpha-beta pruning

use crate::tree::{GameTree, NodeId};

/// Back up values from `depth` plies below `node`, pruning with an
/// `alpha`/`beta` window.
///
/// `alpha` is the value the maximizer can already guarantee and `beta` the value
/// the minimizer can; callers start with `i32::MIN` and `i32::MAX`. Children are
/// tried in tree order and the loop stops as soon as `beta <= alpha`. Skipped
/// children are neither counted in `visited` nor given a value.
///
/// The value returned for the root always matches [`minimax`](super::minimax::minimax).
pub fn alpha_beta(
    tree: &mut GameTree,
    node: NodeId,
    maximizing: bool,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
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

    let best = if maximizing {
        let mut best = i32::MIN;
        for index in 0..child_count {
            let child = tree.child_at(node, index);
            let value = alpha_beta(tree, child, false, depth - 1, alpha, beta, visited);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                // beta cut
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..child_count {
            let child = tree.child_at(node, index);
            let value = alpha_beta(tree, child, true, depth - 1, alpha, beta, visited);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                // alpha cut
                break;
            }
        }
        best
    };

    tree.set_value(node, best);
    best
}
