//! Analyze command - Game tree size and search cost for a row
//!
//! Builds the tree once, then runs every algorithm over it so their values and
//! visit counts can be compared side by side.

use std::{
    fs::File,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use anyhow::{Result, anyhow};
use clap::Parser;
use rand::{SeedableRng, random, rngs::StdRng};
use serde::Serialize;

use crate::{
    cli::output,
    config::{DEFAULT_SEARCH_DEPTH, MAX_ROW_LENGTH},
    game::{GameState, Row},
    search::{Algorithm, MAX_SEARCH_DEPTH, Side, search, select_move},
    tree::GameTree,
};

/// Row length used by `analyze` when neither numbers nor length are given
const DEFAULT_ANALYSIS_LENGTH: usize = 8;

#[derive(Parser, Debug)]
#[command(about = "Analyze the game tree and search cost for a row")]
pub struct AnalyzeArgs {
    /// Row to analyze, e.g. "3,2,1,4"
    #[arg(long, short = 'n')]
    pub numbers: Option<String>,

    /// Length of a random row when no numbers are given
    #[arg(long, short = 'l', default_value_t = DEFAULT_ANALYSIS_LENGTH)]
    pub length: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tree and search depth in plies
    #[arg(long, short = 'd', default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u32,

    /// Build the complete tree and search it to the end
    #[arg(long, conflicts_with = "depth")]
    pub full: bool,

    /// Side to move at the root
    #[arg(long, value_enum, default_value_t = Side::Max)]
    pub side: Side,

    /// Export the analysis as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Tree statistics for the analyzed row
#[derive(Debug, Clone, Serialize)]
pub struct TreeSection {
    pub nodes: usize,
    pub edges: usize,
    pub levels: Vec<usize>,
    pub build_ms: f64,
}

/// One algorithm's result on the shared tree
#[derive(Debug, Clone, Serialize)]
pub struct SearchSection {
    pub algorithm: Algorithm,
    pub value: i32,
    pub nodes_visited: u64,
    pub search_ms: f64,
    pub chosen_move: String,
}

/// Complete analysis of one row
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub row: Vec<u8>,
    pub side: Side,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    pub heuristic: i32,
    pub tree: TreeSection,
    pub searches: Vec<SearchSection>,
}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// Build the tree for `row` and run every algorithm on it.
///
/// `depth` of `None` builds the complete tree and searches down to its deepest
/// level.
pub fn analyze_row(row: &Row, side: Side, depth: Option<u32>) -> Result<AnalysisReport> {
    let state: GameState = row.to_state();
    if state.is_terminal() {
        return Err(anyhow!("Nothing to analyze: the row is empty"));
    }

    let started = Instant::now();
    let mut tree = GameTree::build(state, depth);
    let build_time = started.elapsed();
    let search_depth = depth.unwrap_or_else(|| tree.height());

    let mut searches = Vec::with_capacity(Algorithm::ALL.len());
    for algorithm in Algorithm::ALL {
        let started = Instant::now();
        let outcome = search(&mut tree, side, search_depth, algorithm)?;
        let search_time = started.elapsed();
        let (mv, _) = select_move(&tree, outcome.value)?;
        searches.push(SearchSection {
            algorithm,
            value: outcome.value,
            nodes_visited: outcome.nodes_visited,
            search_ms: millis(search_time),
            chosen_move: mv.to_string(),
        });
    }

    Ok(AnalysisReport {
        row: row.numbers().to_vec(),
        side,
        depth,
        heuristic: state.heuristic_value(),
        tree: TreeSection {
            nodes: tree.len(),
            edges: tree.nodes().map(|(_, node)| node.children().len()).sum(),
            levels: tree.level_sizes(),
            build_ms: millis(build_time),
        },
        searches,
    })
}

fn check_length(length: usize) -> Result<()> {
    if length == 0 || length > MAX_ROW_LENGTH {
        return Err(anyhow!(
            "Row length {length} is out of range (must be 1-{MAX_ROW_LENGTH})"
        ));
    }
    Ok(())
}

fn resolve_row(args: &AnalyzeArgs) -> Result<Row> {
    if let Some(numbers) = &args.numbers {
        let row = Row::parse(numbers)?;
        check_length(row.len())?;
        return Ok(row);
    }
    check_length(args.length)?;
    let mut rng = StdRng::seed_from_u64(args.seed.unwrap_or_else(random));
    Ok(Row::random(args.length, &mut rng))
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let row = resolve_row(&args)?;
    let side = args.side;
    let depth = if args.full {
        None
    } else {
        if args.depth == 0 || args.depth > MAX_SEARCH_DEPTH {
            return Err(anyhow!(
                "Depth {} is out of range (must be 1-{MAX_SEARCH_DEPTH}); use --full for the complete tree",
                args.depth
            ));
        }
        Some(args.depth)
    };

    output::print_section("Game Tree Analysis");
    output::print_kv("Row", &row.to_string());
    output::print_kv("Side to move", &format!("{side:?}"));
    output::print_kv(
        "Depth",
        &depth.map_or_else(|| "full".to_string(), |d| d.to_string()),
    );

    let spinner = output::create_spinner("Building game tree and searching...");
    let report = analyze_row(&row, side, depth);
    spinner.finish_and_clear();
    let report = report?;

    output::print_subsection("Tree");
    output::print_kv("Nodes", &output::format_number(report.tree.nodes as u64));
    output::print_kv("Edges", &output::format_number(report.tree.edges as u64));
    output::print_kv("Build time", &format!("{:.3} ms", report.tree.build_ms));
    output::print_kv("Root heuristic", &report.heuristic.to_string());
    println!("\n  Nodes by depth:");
    for (depth, count) in report.tree.levels.iter().enumerate() {
        println!("    Depth {depth}: {} nodes", output::format_number(*count as u64));
    }

    output::print_subsection("Search");
    for section in &report.searches {
        println!(
            "  {:<12} value {:>3}  visited {:>12}  {:>10.3} ms  best: {}",
            section.algorithm.to_string(),
            section.value,
            output::format_number(section.nodes_visited),
            section.search_ms,
            section.chosen_move
        );
    }

    if let Some(path) = &args.export {
        export_report(&report, path)?;
        println!("\n✓ Analysis exported to: {}", path.display());
    }

    Ok(())
}

/// Export an analysis report to JSON
pub fn export_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
