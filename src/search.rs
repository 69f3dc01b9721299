//! Minimax and alpha-beta search over a built [`GameTree`]
//!
//! Both algorithms are plain recursive functions over the same arena; the caller
//! picks one through [`Algorithm`]. The visited-node counter is threaded through
//! each call, so independent searches never share state.

pub mod alpha_beta;
pub mod engine;
pub mod minimax;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use alpha_beta::alpha_beta;
pub use engine::{MAX_SEARCH_DEPTH, MoveReport, compute_move, select_move};
pub use minimax::minimax;

use crate::{
    Error, Result,
    game::Player,
    tree::{GameTree, NodeId},
};

/// Search algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Exhaustive minimax
    #[value(alias = "mm")]
    Minimax,
    /// Minimax with alpha-beta pruning
    #[default]
    #[value(aliases = ["alphabeta", "alfabeta", "ab"])]
    AlphaBeta,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Minimax, Algorithm::AlphaBeta];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Minimax => write!(f, "minimax"),
            Algorithm::AlphaBeta => write!(f, "alpha-beta"),
        }
    }
}

/// Which end of the value range the side to move is after.
///
/// Scores are from player one's point of view, so player one maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Side {
    /// Player one's side
    #[value(aliases = ["first", "p1"])]
    Max,
    /// Player two's side
    #[value(aliases = ["second", "p2"])]
    Min,
}

impl Side {
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::One => Side::Max,
            Player::Two => Side::Min,
        }
    }

    pub fn is_maximizing(self) -> bool {
        self == Side::Max
    }
}

/// Result of one search pass from the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Backed-up value of the root
    pub value: i32,
    /// Number of nodes the pass visited, counting shared nodes once per visit
    pub nodes_visited: u64,
}

/// Run one search pass from the root of `tree`.
///
/// Values left over from an earlier pass are cleared first, so after the call a
/// node carries a value exactly when this pass visited it.
///
/// # Errors
///
/// Returns [`Error::TreeNotBuilt`] if the tree was never expanded.
pub fn search(
    tree: &mut GameTree,
    side: Side,
    depth: u32,
    algorithm: Algorithm,
) -> Result<SearchOutcome> {
    if !tree.is_built() {
        return Err(Error::TreeNotBuilt);
    }

    tree.clear_values();
    let root: NodeId = GameTree::ROOT;
    let maximizing = side.is_maximizing();
    let mut nodes_visited = 0;
    let value = match algorithm {
        Algorithm::Minimax => minimax(tree, root, maximizing, depth, &mut nodes_visited),
        Algorithm::AlphaBeta => alpha_beta(
            tree,
            root,
            maximizing,
            depth,
            i32::MIN,
            i32::MAX,
            &mut nodes_visited,
        ),
    };

    log::debug!("{algorithm} depth {depth} ({side:?}): value {value}, {nodes_visited} nodes");
    Ok(SearchOutcome {
        value,
        nodes_visited,
    })
}
