//! Ordered row of numbers as the players see it

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, MAX_NUMBER, MIN_NUMBER, Move};
use crate::{Error, Result};

/// The visible row of numbers.
///
/// [`GameState`] only tracks how many of each number remain; the row keeps
/// their order so a human can pick a number by position. A split replaces the
/// number in place with its two halves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    numbers: Vec<u8>,
}

impl Row {
    /// Create a row from explicit numbers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseNumbers`] for any value outside 1-4.
    pub fn from_numbers(numbers: &[u8]) -> Result<Self> {
        if let Some(&bad) = numbers
            .iter()
            .find(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(*n))
        {
            let input = numbers
                .iter()
                .map(u8::to_string)
                .collect::<Vec<_>>()
                .join(",");
            return Err(Error::ParseNumbers {
                input,
                reason: format!("{bad} is outside 1-4"),
            });
        }
        Ok(Self {
            numbers: numbers.to_vec(),
        })
    }

    /// Draw `length` numbers uniformly from 1-4.
    pub fn random<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Self {
        let numbers = (0..length)
            .map(|_| rng.random_range(MIN_NUMBER..=MAX_NUMBER))
            .collect();
        Self { numbers }
    }

    /// Parse a comma or whitespace separated list such as `"3,2,1,4"` or `"3 2 1 4"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseNumbers`] if a token is not a number in 1-4.
    pub fn parse(input: &str) -> Result<Self> {
        let mut numbers = Vec::new();
        for token in input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value: u8 = token.parse().map_err(|_| Error::ParseNumbers {
                input: input.to_string(),
                reason: format!("'{token}' is not a number"),
            })?;
            if !(MIN_NUMBER..=MAX_NUMBER).contains(&value) {
                return Err(Error::ParseNumbers {
                    input: input.to_string(),
                    reason: format!("{value} is outside 1-4"),
                });
            }
            numbers.push(value);
        }
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Count-based state of this row with zeroed counters
    pub fn to_state(&self) -> GameState {
        GameState::from_numbers(&self.numbers)
    }

    fn value_at(&self, index: usize) -> Result<u8> {
        self.numbers
            .get(index)
            .copied()
            .ok_or(Error::InvalidRowIndex {
                index,
                len: self.numbers.len(),
            })
    }

    /// Remove the number at `index` and return the equivalent move.
    pub fn remove_at(&mut self, index: usize) -> Result<Move> {
        let value = self.value_at(index)?;
        self.numbers.remove(index);
        Ok(Move::remove(value))
    }

    /// Split the number at `index` into two halves in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidMove`] if the number is a 1 or a 3, and
    /// [`Error::InvalidRowIndex`] if `index` is past the end.
    pub fn split_at(&mut self, index: usize) -> Result<Move> {
        let value = self.value_at(index)?;
        if !Move::is_splittable(value) {
            return Err(Error::InvalidMove { value, split: true });
        }
        let half = value / 2;
        self.numbers[index] = half;
        self.numbers.insert(index + 1, half);
        Ok(Move::split(value))
    }

    /// Play a count-level move on the leftmost matching number, returning its index.
    pub fn apply(&mut self, mv: Move) -> Result<usize> {
        let index = self
            .numbers
            .iter()
            .position(|&n| n == mv.value)
            .ok_or(Error::InvalidMove {
                value: mv.value,
                split: mv.split,
            })?;
        if mv.split {
            self.split_at(index)?;
        } else {
            self.remove_at(index)?;
        }
        Ok(index)
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.numbers.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", parts.join(" "))
    }
}
