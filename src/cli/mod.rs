//! CLI infrastructure for the parity-split game
//!
//! This module provides the command-line interface for playing against the
//! computer and for analyzing game trees and search costs.

pub mod commands;
pub mod config;
pub mod output;
