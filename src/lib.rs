//! Split-and-parity number game with game-tree search
//!
//! This crate provides:
//! - The game rules over a count-based state (remove a number, or split a 2 or 4)
//! - A breadth-first game tree that merges transpositions into shared nodes
//! - Minimax and alpha-beta search with a positional heuristic
//! - A move-selection entry point and a two-participant game session
//! - The `parity-split` command-line front end
//!
//! # Example
//!
//! ```
//! use parity_split::{
//!     game::GameState,
//!     search::{Algorithm, Side, compute_move},
//! };
//!
//! let state = GameState::from_numbers(&[3, 2, 1, 4]);
//! let report = compute_move(&state, Side::Max, 4, Algorithm::AlphaBeta)?;
//! println!(
//!     "{} -> {} ({} nodes visited)",
//!     report.chosen_move, report.resulting_state, report.nodes_visited
//! );
//! # Ok::<(), parity_split::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod search;
pub mod session;
pub mod tree;

pub use config::{EngineConfig, GameConfig};
pub use error::{Error, Result};
pub use game::{GameOutcome, GameState, Move, Player, Row, new_game};
pub use search::{Algorithm, MoveReport, Side, compute_move};
pub use session::{MatchResult, Participant, Session};
pub use tree::{GameTree, Node, NodeId};
