mod common;

use parity_split::{
    Error,
    game::{
        GameOutcome, GameState, LOSS_SCORE, Move, Player, WIN_SCORE, expand, legal_moves,
        successors,
    },
    tree::GameTree,
};

#[test]
fn single_two_offers_remove_and_split() {
    let state = GameState::from_numbers(&[2]);
    assert_eq!(legal_moves(&state), vec![Move::remove(2), Move::split(2)]);

    let removed = state.apply_move(Move::remove(2)).unwrap();
    assert!(removed.is_terminal());
    assert_eq!(removed.points(), 2);
    assert_eq!(removed.winner(), Some(GameOutcome::Win(Player::One)));
    assert_eq!(removed.heuristic_value(), WIN_SCORE);

    let split = state.apply_move(Move::split(2)).unwrap();
    assert_eq!(split.counts(), [2, 0, 0, 0]);
    assert_eq!(split.bank(), 1);

    let end = split
        .apply_move(Move::remove(1))
        .and_then(|s| s.apply_move(Move::remove(1)))
        .unwrap();
    assert_eq!((end.points(), end.bank()), (2, 1));
    assert_eq!(end.winner(), Some(GameOutcome::Draw));
    assert_eq!(end.heuristic_value(), 0);
}

#[test]
fn pair_of_ones_only_allows_removal() {
    let state = GameState::from_numbers(&[1, 1]);
    assert_eq!(legal_moves(&state), vec![Move::remove(1)]);
    assert!(matches!(
        state.apply_move(Move::split(1)),
        Err(Error::InvalidMove { value: 1, split: true })
    ));

    let end = state
        .apply_move(Move::remove(1))
        .and_then(|s| s.apply_move(Move::remove(1)))
        .unwrap();
    assert_eq!(end.winner(), Some(GameOutcome::Win(Player::One)));
}

#[test]
fn empty_row_is_already_over() {
    let state = GameState::from_numbers(&[]);
    assert!(state.is_terminal());
    assert!(legal_moves(&state).is_empty());
    assert!(expand(&state).is_empty());
    assert!(matches!(state.apply_move(Move::remove(1)), Err(Error::EmptyState)));
}

#[test]
fn odd_points_and_odd_bank_is_a_win_for_player_two() {
    let state = GameState::with_parts([0, 0, 0, 0], 3, 1);
    assert_eq!(state.winner(), Some(GameOutcome::Win(Player::Two)));
    assert_eq!(state.heuristic_value(), LOSS_SCORE);
}

#[test]
fn states_are_equal_regardless_of_move_order() {
    let state = GameState::from_numbers(&[1, 2, 4]);
    let a = state
        .apply_move(Move::remove(1))
        .and_then(|s| s.apply_move(Move::remove(2)))
        .unwrap();
    let b = state
        .apply_move(Move::remove(2))
        .and_then(|s| s.apply_move(Move::remove(1)))
        .unwrap();
    assert_eq!(a, b);
    assert_eq!(a.cmp(&b), std::cmp::Ordering::Equal);

    // built from a list with the same counts
    assert_eq!(GameState::from_numbers(&[4, 2, 1]), state);
}

#[test]
fn ordering_compares_points_then_bank_then_counts() {
    let low_points = GameState::with_parts([0, 0, 0, 9], 1, 5);
    let high_points = GameState::with_parts([1, 0, 0, 0], 2, 0);
    assert!(low_points < high_points);

    let low_bank = GameState::with_parts([0, 0, 0, 9], 2, 0);
    let high_bank = GameState::with_parts([1, 0, 0, 0], 2, 1);
    assert!(low_bank < high_bank);

    let fewer_ones = GameState::with_parts([0, 5, 0, 0], 2, 1);
    let more_ones = GameState::with_parts([1, 0, 0, 0], 2, 1);
    assert!(fewer_ones < more_ones);
}

#[test]
fn heuristic_branches() {
    // no 2s or 4s: bank parity is settled
    assert_eq!(GameState::with_parts([1, 0, 1, 0], 0, 0).heuristic_value(), 9);
    assert_eq!(GameState::with_parts([1, 0, 1, 0], 0, 1).heuristic_value(), -9);
    // exactly two splittable numbers
    assert_eq!(GameState::from_numbers(&[2, 4, 1]).heuristic_value(), 8);
    // exactly one
    assert_eq!(GameState::from_numbers(&[3, 2]).heuristic_value(), -8);
    // winnable with both counters even
    assert_eq!(GameState::from_numbers(&[4, 4, 4]).heuristic_value(), 1);
    // not winnable, exactly one counter even
    assert_eq!(GameState::with_parts([1, 3, 0, 0], 0, 1).heuristic_value(), 1);
    // neutral
    assert_eq!(GameState::from_numbers(&[1, 2, 2, 2]).heuristic_value(), 0);
    assert_eq!(GameState::with_parts([0, 3, 0, 0], 0, 1).heuristic_value(), 0);
}

#[test]
fn terminal_heuristic_matches_winner_everywhere() {
    for state in common::sample_states(4, 6) {
        let tree = GameTree::build(state, None);
        for (_, node) in tree.nodes() {
            let state = node.state();
            let Some(outcome) = state.winner() else {
                assert!(!state.is_terminal());
                continue;
            };
            let expected = match outcome {
                GameOutcome::Win(Player::One) => WIN_SCORE,
                GameOutcome::Win(Player::Two) => LOSS_SCORE,
                GameOutcome::Draw => 0,
            };
            assert_eq!(state.heuristic_value(), expected, "state {state}");
        }
    }
}

#[test]
fn moves_never_decrease_points_or_bank() {
    for state in common::sample_states(4, 8) {
        for (mv, next) in successors(&state) {
            assert!(next.points() >= state.points());
            assert!(next.bank() >= state.bank());
            if mv.split {
                assert_eq!(next.total_count(), state.total_count() + 1);
            } else {
                assert_eq!(next.total_count(), state.total_count() - 1);
                assert_eq!(next.points(), state.points() + u32::from(mv.value));
            }
        }
    }
}
