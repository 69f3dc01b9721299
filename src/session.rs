//! A single game between two participants
//!
//! The session keeps the visible [`Row`] and the count-based [`GameState`] in
//! step: human moves are made by position on the row, computer moves come from
//! [`compute_move`] and are mirrored onto the leftmost matching number.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    config::{EngineConfig, GameConfig},
    game::{GameOutcome, GameState, Move, Player, Row},
    search::{MoveReport, Side, compute_move},
};

/// Who controls a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Participant {
    #[default]
    Human,
    Computer,
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Human => write!(f, "human"),
            Participant::Computer => write!(f, "computer"),
        }
    }
}

/// Final result from the participants' point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Winner { player: Player, participant: Participant },
    Draw,
}

/// One move in the session history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub player: Player,
    pub participant: Participant,
    pub mv: Move,
    /// Position in the row the move was made at
    pub index: usize,
}

/// A game in progress
#[derive(Debug, Clone)]
pub struct Session {
    row: Row,
    state: GameState,
    engine: EngineConfig,
    participants: [Participant; 2],
    to_move: Player,
    history: Vec<Turn>,
}

impl Session {
    /// Start a session from a validated configuration.
    pub fn new(config: &GameConfig) -> Result<Self> {
        config.validate()?;
        let row = config.initial_row()?;
        Self::with_row(row, config.first, config.second, config.engine)
    }

    /// Start a session on an explicit row.
    pub fn with_row(
        row: Row,
        first: Participant,
        second: Participant,
        engine: EngineConfig,
    ) -> Result<Self> {
        engine.validate()?;
        info!("new game on row [{row}]: {first} plays first, {second} second");
        Ok(Self {
            state: row.to_state(),
            row,
            engine,
            participants: [first, second],
            to_move: Player::One,
            history: Vec::new(),
        })
    }

    pub fn row(&self) -> &Row {
        &self.row
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    pub fn history(&self) -> &[Turn] {
        &self.history
    }

    /// Participant controlling `player`
    pub fn participant(&self, player: Player) -> Participant {
        match player {
            Player::One => self.participants[0],
            Player::Two => self.participants[1],
        }
    }

    pub fn player_to_move(&self) -> Player {
        self.to_move
    }

    pub fn participant_to_move(&self) -> Participant {
        self.participant(self.to_move)
    }

    pub fn side_to_move(&self) -> Side {
        Side::for_player(self.to_move)
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    fn ensure_turn(&self, participant: Participant) -> Result<()> {
        if self.is_over() {
            return Err(Error::EmptyState);
        }
        if self.participant_to_move() != participant {
            return Err(Error::WrongParticipant {
                participant: participant.to_string(),
            });
        }
        Ok(())
    }

    fn record(&mut self, mv: Move, index: usize, next: GameState) {
        let participant = self.participant_to_move();
        info!("{} ({participant}) plays {mv} at position {index}", self.to_move);
        self.history.push(Turn {
            player: self.to_move,
            participant,
            mv,
            index,
        });
        self.state = next;
        self.to_move = self.to_move.opponent();
    }

    /// Human move: remove or split the number at `index`.
    ///
    /// # Errors
    ///
    /// Fails without changing the session if the game is over, it is the
    /// computer's turn, `index` is out of bounds, or a 1 or 3 is split.
    pub fn play_index(&mut self, index: usize, split: bool) -> Result<Move> {
        self.ensure_turn(Participant::Human)?;

        let mut row = self.row.clone();
        let mv = if split {
            row.split_at(index)?
        } else {
            row.remove_at(index)?
        };
        let next = self.state.apply_move(mv)?;

        self.row = row;
        self.record(mv, index, next);
        Ok(mv)
    }

    /// Computer move with the configured algorithm and depth.
    pub fn play_computer(&mut self) -> Result<MoveReport> {
        self.ensure_turn(Participant::Computer)?;

        let report = compute_move(
            &self.state,
            self.side_to_move(),
            self.engine.depth,
            self.engine.algorithm,
        )?;
        let index = self.row.apply(report.chosen_move)?;
        self.record(report.chosen_move, index, report.resulting_state);
        Ok(report)
    }

    /// Result once the row is empty, `None` while the game is running.
    pub fn result(&self) -> Option<MatchResult> {
        self.state.winner().map(|outcome| match outcome {
            GameOutcome::Win(player) => MatchResult::Winner {
                player,
                participant: self.participant(player),
            },
            GameOutcome::Draw => MatchResult::Draw,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Algorithm;

    fn session(numbers: &[u8], first: Participant, second: Participant) -> Session {
        Session::with_row(
            Row::from_numbers(numbers).unwrap(),
            first,
            second,
            EngineConfig::new().with_depth(3),
        )
        .unwrap()
    }

    #[test]
    fn human_moves_update_row_and_state() {
        let mut game = session(&[3, 4, 1], Participant::Human, Participant::Computer);
        assert_eq!(game.play_index(1, true).unwrap(), Move::split(4));
        assert_eq!(game.row().numbers(), &[3, 2, 2, 1]);
        assert_eq!(game.state().points(), 2);
        assert_eq!(game.player_to_move(), Player::Two);
        assert_eq!(game.side_to_move(), Side::Min);
    }

    #[test]
    fn rejected_moves_leave_session_untouched() {
        let mut game = session(&[3, 1], Participant::Human, Participant::Computer);
        assert!(game.play_index(0, true).is_err());
        assert!(game.play_index(5, false).is_err());
        assert_eq!(game.row().numbers(), &[3, 1]);
        assert!(game.history().is_empty());
        assert_eq!(game.player_to_move(), Player::One);
    }

    #[test]
    fn turns_are_enforced() {
        let mut game = session(&[3, 1], Participant::Human, Participant::Computer);
        assert!(matches!(
            game.play_computer(),
            Err(Error::WrongParticipant { .. })
        ));
        game.play_index(0, false).unwrap();
        assert!(matches!(
            game.play_index(0, false),
            Err(Error::WrongParticipant { .. })
        ));
        game.play_computer().unwrap();
        assert!(game.is_over());
        assert!(matches!(game.play_index(0, false), Err(Error::EmptyState)));
    }

    #[test]
    fn self_play_runs_to_completion_with_row_in_sync() {
        let mut game = Session::with_row(
            Row::from_numbers(&[3, 2, 1, 4, 2, 3, 4, 1]).unwrap(),
            Participant::Computer,
            Participant::Computer,
            EngineConfig::new()
                .with_depth(4)
                .with_algorithm(Algorithm::Minimax),
        )
        .unwrap();

        while !game.is_over() {
            game.play_computer().unwrap();
            assert_eq!(game.row().to_state().counts(), game.state().counts());
        }
        assert!(game.result().is_some());
        assert!(game.row().is_empty());
    }

    #[test]
    fn computer_as_first_player_takes_the_win() {
        let mut game = session(&[2], Participant::Computer, Participant::Human);
        game.play_computer().unwrap();
        assert_eq!(game.history()[0].mv, Move::remove(2));
        assert_eq!(
            game.result(),
            Some(MatchResult::Winner {
                player: Player::One,
                participant: Participant::Computer
            })
        );
    }

    #[test]
    fn computer_as_second_player_splits_for_odd_parity() {
        // after the human takes the 1, removing the 2 only draws while
        // splitting it leaves points and bank both odd at the end
        let mut game = session(&[1, 2], Participant::Human, Participant::Computer);
        game.play_index(0, false).unwrap();
        let report = game.play_computer().unwrap();
        assert_eq!(report.chosen_move, Move::split(2));
        assert_eq!(report.value, -10);
        assert_eq!(game.row().numbers(), &[1, 1]);
    }

    #[test]
    fn empty_row_is_decided_immediately() {
        let game = session(&[], Participant::Human, Participant::Computer);
        assert!(game.is_over());
        assert_eq!(
            game.result(),
            Some(MatchResult::Winner {
                player: Player::One,
                participant: Participant::Human
            })
        );
    }
}
