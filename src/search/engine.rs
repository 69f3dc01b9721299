//! Move selection: build, search, and map the optimal value back to a move

use std::time::{Duration, Instant};

use log::debug;

use super::{Algorithm, Side, search};
use crate::{
    Error, Result,
    game::{GameState, Move, legal_moves},
    tree::GameTree,
};

/// Deepest lookahead accepted by [`compute_move`].
///
/// Minimax walks every path through shared nodes, so its visits grow roughly
/// five to six times per ply on a long row: about 8 million visits at depth 9
/// on a 15-number row, and several seconds per move near this limit. Alpha-beta
/// stays well below that.
pub const MAX_SEARCH_DEPTH: u32 = 12;

/// Everything the caller needs after the computer picked a move
#[derive(Debug, Clone, Copy)]
pub struct MoveReport {
    pub chosen_move: Move,
    pub resulting_state: GameState,
    /// Optimal value backed up to the root
    pub value: i32,
    pub nodes_visited: u64,
    /// Distinct nodes in the searched tree
    pub tree_nodes: usize,
    pub build_time: Duration,
    pub search_time: Duration,
}

impl MoveReport {
    /// Combined tree construction and search time
    pub fn elapsed(&self) -> Duration {
        self.build_time + self.search_time
    }
}

/// Pick the best move for `side` from `state` with a `depth`-ply lookahead.
///
/// Builds a tree `depth` levels deep, searches it, then replays the legal moves
/// in scan order (ascending value, remove before split) and returns the first
/// one whose resulting state is a root child carrying the optimal value.
///
/// # Examples
///
/// ```
/// use parity_split::{
///     game::{GameState, Move},
///     search::{Algorithm, Side, compute_move},
/// };
///
/// let report = compute_move(&GameState::from_numbers(&[2]), Side::Max, 3, Algorithm::AlphaBeta)?;
/// assert_eq!(report.chosen_move, Move::remove(2));
/// assert_eq!(report.value, 10);
/// # Ok::<(), parity_split::Error>(())
/// ```
///
/// # Errors
///
/// - [`Error::InvalidDepth`] if `depth` is 0 or above [`MAX_SEARCH_DEPTH`]
/// - [`Error::EmptyState`] if `state` has no numbers left
pub fn compute_move(
    state: &GameState,
    side: Side,
    depth: u32,
    algorithm: Algorithm,
) -> Result<MoveReport> {
    if depth == 0 || depth > MAX_SEARCH_DEPTH {
        return Err(Error::InvalidDepth {
            depth,
            max: MAX_SEARCH_DEPTH,
        });
    }
    if state.is_terminal() {
        return Err(Error::EmptyState);
    }

    let started = Instant::now();
    let mut tree = GameTree::build(*state, Some(depth));
    let build_time = started.elapsed();

    let started = Instant::now();
    let outcome = search(&mut tree, side, depth, algorithm)?;
    let search_time = started.elapsed();

    let (chosen_move, resulting_state) = select_move(&tree, outcome.value)?;

    debug!(
        "chose {chosen_move} (value {}) from {state}: {} tree nodes in {build_time:?}, {} visited in {search_time:?}",
        outcome.value,
        tree.len(),
        outcome.nodes_visited
    );

    Ok(MoveReport {
        chosen_move,
        resulting_state,
        value: outcome.value,
        nodes_visited: outcome.nodes_visited,
        tree_nodes: tree.len(),
        build_time,
        search_time,
    })
}

/// Map a searched root value back to a concrete move.
///
/// Replays the root state's legal moves in scan order and returns the first one
/// whose resulting state is a root child carrying `value`.
///
/// # Errors
///
/// Returns [`Error::MoveNotFound`] if no root child carries `value`, which
/// happens when the tree was not searched or was searched for another value.
pub fn select_move(tree: &GameTree, value: i32) -> Result<(Move, GameState)> {
    let state = tree.root().state();
    legal_moves(state)
        .into_iter()
        .find_map(|mv| {
            let next = state.apply_legal(mv);
            let child = tree.child_with_state(GameTree::ROOT, &next)?;
            (tree.node(child).value() == Some(value)).then_some((mv, next))
        })
        .ok_or(Error::MoveNotFound { value })
}
