//! Shared helpers for the integration tests.

#![allow(dead_code)]

use parity_split::{
    game::{GameState, Row, expand},
    search::Side,
};
use rand::{SeedableRng, rngs::StdRng};

/// Hand-picked rows covering single values, repeats, and mixed splits
pub const SAMPLE_ROWS: &[&[u8]] = &[
    &[2],
    &[1, 1],
    &[1, 2],
    &[4],
    &[3, 3, 1],
    &[2, 4],
    &[4, 4, 2],
    &[3, 2, 1, 4],
    &[1, 2, 3, 4, 2],
    &[3, 2, 1, 4, 2, 3],
];

/// Reproducible random rows of the given length
pub fn seeded_rows(count: usize, length: usize, seed: u64) -> Vec<Row> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| Row::random(length, &mut rng)).collect()
}

/// Sample rows as states, followed by `extra` seeded random rows of `length`
pub fn sample_states(extra: usize, length: usize) -> Vec<GameState> {
    SAMPLE_ROWS
        .iter()
        .map(|numbers| GameState::from_numbers(numbers))
        .chain(seeded_rows(extra, length, 7).iter().map(Row::to_state))
        .collect()
}

/// Plain recursive minimax straight over the successor function, without a tree.
pub fn reference_value(state: &GameState, side: Side, depth: u32) -> i32 {
    let successors = expand(state);
    if state.is_terminal() || depth == 0 || successors.is_empty() {
        return state.heuristic_value();
    }
    let next_side = match side {
        Side::Max => Side::Min,
        Side::Min => Side::Max,
    };
    let values = successors
        .iter()
        .map(|next| reference_value(next, next_side, depth - 1));
    match side {
        Side::Max => values.max().unwrap_or(i32::MIN),
        Side::Min => values.min().unwrap_or(i32::MAX),
    }
}
