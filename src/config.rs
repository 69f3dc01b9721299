//! Configuration types for the search engine and for a game session.

use std::path::Path;

use rand::{SeedableRng, random, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    game::{MAX_NUMBER, MIN_NUMBER, Row},
    search::{Algorithm, MAX_SEARCH_DEPTH},
    session::Participant,
};

/// Row length used when none is given
pub const DEFAULT_ROW_LENGTH: usize = 15;
/// Longest random row a session accepts
pub const MAX_ROW_LENGTH: usize = 30;
/// Lookahead used when none is given
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;

/// How the computer searches for its moves.
///
/// # Examples
///
/// ```
/// use parity_split::{config::EngineConfig, search::Algorithm};
///
/// let config = EngineConfig::new()
///     .with_algorithm(Algorithm::Minimax)
///     .with_depth(6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Search algorithm
    pub algorithm: Algorithm,
    /// Lookahead in plies
    pub depth: u32,
}

impl EngineConfig {
    /// Alpha-beta with the default depth
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::default(),
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Check that the depth is within `1..=MAX_SEARCH_DEPTH`.
    pub fn validate(&self) -> Result<()> {
        if self.depth == 0 || self.depth > MAX_SEARCH_DEPTH {
            return Err(Error::InvalidDepth {
                depth: self.depth,
                max: MAX_SEARCH_DEPTH,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Setup of a single game.
///
/// When `numbers` is set it is used as the row and `row_length` is ignored;
/// otherwise `row_length` numbers are drawn at random, reproducibly if `seed`
/// is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Length of a randomly drawn row
    pub row_length: usize,
    /// Explicit starting row
    pub numbers: Option<Vec<u8>>,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Who moves first (player one)
    pub first: Participant,
    /// Who moves second (player two)
    pub second: Participant,
    /// Computer search settings
    pub engine: EngineConfig,
}

impl GameConfig {
    /// Human against computer on a random row of the default length
    pub fn new() -> Self {
        Self {
            row_length: DEFAULT_ROW_LENGTH,
            numbers: None,
            seed: None,
            first: Participant::Human,
            second: Participant::Computer,
            engine: EngineConfig::new(),
        }
    }

    pub fn with_row_length(mut self, row_length: usize) -> Self {
        self.row_length = row_length;
        self
    }

    pub fn with_numbers(mut self, numbers: Vec<u8>) -> Self {
        self.numbers = Some(numbers);
        self
    }

    /// Set the random seed for deterministic rows.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set who plays first and second.
    pub fn with_participants(mut self, first: Participant, second: Participant) -> Self {
        self.first = first;
        self.second = second;
        self
    }

    pub fn with_engine(mut self, engine: EngineConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Check row and engine settings.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidRowLength`] for a random row of length 0 or above
    ///   [`MAX_ROW_LENGTH`], or an explicit row longer than that
    /// - [`Error::InvalidConfiguration`] for an explicit row with no numbers or
    ///   with a number outside 1-4
    /// - [`Error::InvalidDepth`] for an out-of-range engine depth
    pub fn validate(&self) -> Result<()> {
        match &self.numbers {
            Some(numbers) if numbers.is_empty() => {
                return Err(Error::InvalidConfiguration {
                    message: "explicit row has no numbers".to_string(),
                });
            }
            Some(numbers) => {
                if let Some(bad) = numbers
                    .iter()
                    .find(|n| !(MIN_NUMBER..=MAX_NUMBER).contains(*n))
                {
                    return Err(Error::InvalidConfiguration {
                        message: format!("row number {bad} is outside {MIN_NUMBER}-{MAX_NUMBER}"),
                    });
                }
                if numbers.len() > MAX_ROW_LENGTH {
                    return Err(Error::InvalidRowLength {
                        length: numbers.len(),
                        max: MAX_ROW_LENGTH,
                    });
                }
            }
            None if self.row_length == 0 || self.row_length > MAX_ROW_LENGTH => {
                return Err(Error::InvalidRowLength {
                    length: self.row_length,
                    max: MAX_ROW_LENGTH,
                });
            }
            _ => {}
        }
        self.engine.validate()
    }

    /// Produce the starting row.
    pub fn initial_row(&self) -> Result<Row> {
        if let Some(numbers) = &self.numbers {
            return Row::from_numbers(numbers);
        }
        let mut rng = StdRng::seed_from_u64(self.seed.unwrap_or_else(random));
        Ok(Row::random(self.row_length, &mut rng))
    }

    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read config {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
