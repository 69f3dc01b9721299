//! Count-based game state and move application

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Smallest number that can appear in a row
pub const MIN_NUMBER: u8 = 1;
/// Largest number that can appear in a row
pub const MAX_NUMBER: u8 = 4;

/// Heuristic score of a finished game won by [`Player::One`]
pub const WIN_SCORE: i32 = 10;
/// Heuristic score of a finished game won by [`Player::Two`]
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// A player in the game. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A single move: remove one number, or split a 2 or a 4 into two halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub value: u8,
    pub split: bool,
}

impl Move {
    /// Remove one instance of `value`
    pub fn remove(value: u8) -> Self {
        Self {
            value,
            split: false,
        }
    }

    /// Split one instance of `value` (only 2 and 4 are splittable)
    pub fn split(value: u8) -> Self {
        Self { value, split: true }
    }

    /// Whether `value` can ever be split
    pub fn is_splittable(value: u8) -> bool {
        value == 2 || value == 4
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.split {
            write!(f, "split {}", self.value)
        } else {
            write!(f, "remove {}", self.value)
        }
    }
}

/// Game state: how many of each number remain, plus the points and bank counters.
///
/// Two states are equal when their counters and counts match, regardless of the
/// order in which the numbers were taken. The derived ordering compares points,
/// then bank, then counts by value, which is what the tree builder relies on for
/// deterministic deduplication.
///
/// This type implements `Copy` since it is only six machine words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameState {
    points: u32,
    bank: u32,
    counts: [u32; MAX_NUMBER as usize],
}

impl GameState {
    /// Build a state from a raw list of numbers.
    ///
    /// Values outside 1-4 are ignored. Points and bank start at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use parity_split::game::GameState;
    ///
    /// let state = GameState::from_numbers(&[3, 2, 1, 4, 2, 9]);
    /// assert_eq!(state.count(2), 2);
    /// assert_eq!(state.total_count(), 5);
    /// assert_eq!(state.points(), 0);
    /// ```
    pub fn from_numbers(numbers: &[u8]) -> Self {
        let mut state = Self::default();
        for &number in numbers {
            if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
                state.counts[Self::slot(number)] += 1;
            }
        }
        state
    }

    /// Build a state directly from its parts. Counts are indexed by `value - 1`.
    pub fn with_parts(counts: [u32; MAX_NUMBER as usize], points: u32, bank: u32) -> Self {
        Self {
            points,
            bank,
            counts,
        }
    }

    fn slot(value: u8) -> usize {
        usize::from(value - MIN_NUMBER)
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn bank(&self) -> u32 {
        self.bank
    }

    /// Number of remaining instances of `value` (zero for values outside 1-4)
    pub fn count(&self, value: u8) -> u32 {
        if (MIN_NUMBER..=MAX_NUMBER).contains(&value) {
            self.counts[Self::slot(value)]
        } else {
            0
        }
    }

    /// All counts, indexed by `value - 1`
    pub fn counts(&self) -> [u32; MAX_NUMBER as usize] {
        self.counts
    }

    /// Total amount of numbers still in the row
    pub fn total_count(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// True once every number has been removed
    pub fn is_terminal(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }

    /// Values that are currently present, in ascending order.
    ///
    /// Identical values lead to identical successors, so move generation only
    /// needs to try each distinct value once.
    pub fn distinct_movable_values(&self) -> Vec<u8> {
        (MIN_NUMBER..=MAX_NUMBER)
            .filter(|&value| self.count(value) > 0)
            .collect()
    }

    /// Check whether `mv` can be played from this state.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyState`] if no numbers remain
    /// - [`Error::InvalidMove`] if the value is absent, out of range, or a split
    ///   of a 1 or a 3
    pub fn validate_move(&self, mv: Move) -> Result<()> {
        if self.is_terminal() {
            return Err(Error::EmptyState);
        }
        let invalid = Error::InvalidMove {
            value: mv.value,
            split: mv.split,
        };
        if self.count(mv.value) == 0 || (mv.split && !Move::is_splittable(mv.value)) {
            return Err(invalid);
        }
        Ok(())
    }

    /// Apply a move and return the resulting state.
    ///
    /// # Examples
    ///
    /// ```
    /// use parity_split::game::{GameState, Move};
    ///
    /// let state = GameState::from_numbers(&[4]);
    /// let next = state.apply_move(Move::split(4)).unwrap();
    /// assert_eq!(next.count(2), 2);
    /// assert_eq!(next.points(), 2);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`GameState::validate_move`].
    pub fn apply_move(&self, mv: Move) -> Result<GameState> {
        self.validate_move(mv)?;
        Ok(self.apply_legal(mv))
    }

    /// Apply a move already known to be legal.
    pub(crate) fn apply_legal(&self, mv: Move) -> GameState {
        debug_assert!(self.validate_move(mv).is_ok(), "illegal move {mv}");

        let mut next = *self;
        next.counts[Self::slot(mv.value)] -= 1;
        match (mv.split, mv.value) {
            (true, 2) => {
                next.counts[Self::slot(1)] += 2;
                next.bank += 1;
            }
            (true, 4) => {
                next.counts[Self::slot(2)] += 2;
                next.points += 2;
            }
            _ => next.points += u32::from(mv.value),
        }
        next
    }

    /// Winner of a finished game, `None` while numbers remain.
    ///
    /// Player one wins when both points and bank are even, player two when both
    /// are odd. Mixed parity is a draw.
    pub fn winner(&self) -> Option<GameOutcome> {
        if !self.is_terminal() {
            return None;
        }
        let outcome = match (self.points % 2 == 0, self.bank % 2 == 0) {
            (true, true) => GameOutcome::Win(Player::One),
            (false, false) => GameOutcome::Win(Player::Two),
            _ => GameOutcome::Draw,
        };
        Some(outcome)
    }

    /// Static evaluation from player one's point of view, in `-10..=10`.
    ///
    /// Only exact for finished games; the remaining branches estimate which
    /// parity the side to move can still force from the amount of splittable
    /// (2 and 4) and odd (1 and 3) numbers left.
    pub fn heuristic_value(&self) -> i32 {
        if let Some(outcome) = self.winner() {
            return match outcome {
                GameOutcome::Win(Player::One) => WIN_SCORE,
                GameOutcome::Win(Player::Two) => LOSS_SCORE,
                GameOutcome::Draw => 0,
            };
        }

        let splittable = self.count(2) + self.count(4);
        match splittable {
            // Bank can no longer change
            0 => return if self.bank % 2 == 0 { 9 } else { -9 },
            2 => return 8,
            1 => return -8,
            _ => {}
        }

        let odd_sources = self.count(1) + self.count(3);
        let points_even = self.points % 2 == 0;
        let bank_even = self.bank % 2 == 0;
        let winnable = points_even == (odd_sources % 2 == 0);

        if winnable && points_even && bank_even {
            1
        } else if !winnable && points_even != bank_even {
            1
        } else {
            0
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[1:{} 2:{} 3:{} 4:{}] points={} bank={}",
            self.counts[0], self.counts[1], self.counts[2], self.counts[3], self.points, self.bank
        )
    }
}
