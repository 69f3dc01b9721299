//! Play command - Interactive game against the computer

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use crate::{
    cli::{config::EngineArgs, output},
    config::GameConfig,
    game::Row,
    session::{MatchResult, Participant, Session},
};

#[derive(Parser, Debug)]
#[command(about = "Play a game against the computer")]
pub struct PlayArgs {
    /// Length of the random starting row
    #[arg(long, short = 'l')]
    pub length: Option<usize>,

    /// Explicit starting row, e.g. "3,2,1,4"
    #[arg(long, short = 'n')]
    pub numbers: Option<String>,

    #[command(flatten)]
    pub engine: EngineArgs,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Let the computer make the first move
    #[arg(long)]
    pub computer_first: bool,

    /// Let the computer play both sides
    #[arg(long, conflicts_with = "computer_first")]
    pub self_play: bool,

    /// Load game settings from a JSON file; other options override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// A line of human input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove (`split == false`) or split the number at a 0-based index
    Move { index: usize, split: bool },
    Help,
    Quit,
}

/// Parse `r 3`, `remove 3`, `s 3`, `split 3`, `help` or `quit`.
///
/// Positions are 1-based as printed under the row.
pub fn parse_command(line: &str) -> Result<Command> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Command::Help);
    };
    let verb = verb.to_ascii_lowercase();
    let split = match verb.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "h" | "help" | "?" => return Ok(Command::Help),
        "r" | "remove" => false,
        "s" | "split" => true,
        other => return Err(anyhow!("Unknown command '{other}'. Type 'help' for usage")),
    };

    let position = parts
        .next()
        .ok_or_else(|| anyhow!("Missing position after '{verb}'"))?;
    let position: usize = position
        .parse()
        .with_context(|| format!("Invalid position '{position}'"))?;
    if position == 0 {
        return Err(anyhow!("Positions start at 1"));
    }
    if parts.next().is_some() {
        return Err(anyhow!("Expected a single position after '{verb}'"));
    }

    Ok(Command::Move {
        index: position - 1,
        split,
    })
}

fn build_config(args: &PlayArgs) -> Result<GameConfig> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => GameConfig::default(),
    };

    if let Some(length) = args.length {
        config = config.with_row_length(length);
    }
    if let Some(numbers) = &args.numbers {
        config = config.with_numbers(Row::parse(numbers)?.numbers().to_vec());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.self_play {
        config = config.with_participants(Participant::Computer, Participant::Computer);
    } else if args.computer_first {
        config = config.with_participants(Participant::Computer, Participant::Human);
    }
    config.engine = args.engine.apply(config.engine)?;

    config.validate()?;
    Ok(config)
}

fn print_help() {
    println!("  Commands:");
    println!("    r <pos>, remove <pos>   remove the number at <pos>");
    println!("    s <pos>, split <pos>    split the 2 or 4 at <pos>");
    println!("    help                    show this message");
    println!("    quit                    leave the game");
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = build_config(&args)?;
    let mut session = Session::new(&config)?;

    output::print_section("Parity Split");
    output::print_kv("Player 1", &config.first.to_string());
    output::print_kv("Player 2", &config.second.to_string());
    output::print_kv("Algorithm", &config.engine.algorithm.to_string());
    output::print_kv("Depth", &config.engine.depth.to_string());
    if let Some(seed) = config.seed {
        output::print_kv("Seed", &seed.to_string());
    }
    println!("\n  Player 1 wins with even points and even bank,");
    println!("  player 2 with odd points and odd bank; anything else is a draw.");
    if config.first == Participant::Human || config.second == Participant::Human {
        print_help();
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        output::print_position(&session);

        match session.participant_to_move() {
            Participant::Computer => {
                let report = session.play_computer()?;
                println!(
                    "\n  Computer plays {} (value {}, {} nodes visited, tree {} nodes, {} build + {} search)",
                    report.chosen_move,
                    report.value,
                    output::format_number(report.nodes_visited),
                    output::format_number(report.tree_nodes as u64),
                    output::format_duration(report.build_time),
                    output::format_duration(report.search_time)
                );
            }
            Participant::Human => {
                print!("> ");
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    println!("\nInput closed, leaving game.");
                    return Ok(());
                };
                match parse_command(&line?) {
                    Ok(Command::Move { index, split }) => {
                        if let Err(err) = session.play_index(index, split) {
                            println!("  {err}");
                        }
                    }
                    Ok(Command::Help) => print_help(),
                    Ok(Command::Quit) => {
                        println!("Leaving game.");
                        return Ok(());
                    }
                    Err(err) => println!("  {err:#}"),
                }
            }
        }
    }

    output::print_position(&session);
    output::print_subsection("Result");
    match session.result() {
        Some(MatchResult::Winner {
            player,
            participant,
        }) => println!("  {participant} wins as {player}"),
        Some(MatchResult::Draw) => println!("  Draw"),
        None => {}
    }

    Ok(())
}
