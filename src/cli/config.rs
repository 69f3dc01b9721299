//! Shared command-line options

use anyhow::Result;
use clap::Args;

use crate::{config::EngineConfig, search::Algorithm};

/// Search options shared across commands
#[derive(Args, Debug, Clone, Default)]
pub struct EngineArgs {
    /// Search algorithm
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: Option<Algorithm>,

    /// Lookahead depth in plies
    #[arg(long, short = 'd')]
    pub depth: Option<u32>,
}

impl EngineArgs {
    /// Overlay the options that were given on top of `base`.
    pub fn apply(&self, base: EngineConfig) -> Result<EngineConfig> {
        let mut config = base;
        if let Some(algorithm) = self.algorithm {
            config = config.with_algorithm(algorithm);
        }
        if let Some(depth) = self.depth {
            config = config.with_depth(depth);
        }
        config.validate()?;
        Ok(config)
    }
}
