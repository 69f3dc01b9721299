//! Split-and-parity number game

pub mod expander;
pub mod row;
pub mod state;

use rand::Rng;

pub use expander::{expand, legal_moves, successors};
pub use row::Row;
pub use state::{GameOutcome, GameState, LOSS_SCORE, MAX_NUMBER, MIN_NUMBER, Move, Player, WIN_SCORE};

/// Start a game on `row_length` numbers drawn uniformly from 1-4.
pub fn new_game<R: Rng + ?Sized>(row_length: usize, rng: &mut R) -> GameState {
    Row::random(row_length, rng).to_state()
}
