//! Successor generation

use super::state::{GameState, Move};

/// All legal moves from `state`, in scan order: ascending value, and for each
/// value the remove before the split.
///
/// Only distinct values are tried, since two copies of the same number lead to
/// the same successor.
pub fn legal_moves(state: &GameState) -> Vec<Move> {
    let mut moves = Vec::new();
    for value in state.distinct_movable_values() {
        moves.push(Move::remove(value));
        if Move::is_splittable(value) {
            moves.push(Move::split(value));
        }
    }
    moves
}

/// Distinct successor states paired with the first move producing each of them.
pub fn successors(state: &GameState) -> Vec<(Move, GameState)> {
    let mut out: Vec<(Move, GameState)> = Vec::new();
    for mv in legal_moves(state) {
        let next = state.apply_legal(mv);
        if !out.iter().any(|(_, existing)| *existing == next) {
            out.push((mv, next));
        }
    }
    out
}

/// Distinct successor states of `state`, in scan order.
pub fn expand(state: &GameState) -> Vec<GameState> {
    successors(state).into_iter().map(|(_, next)| next).collect()
}
