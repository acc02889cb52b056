//! Command-line driver: load instances, solve each under a budget, report.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use serde::Serialize;

use tsp_anytime::io::load_instance;
use tsp_anytime::models::{Tour, TspProblem};
use tsp_anytime::solver::AnytimeSolver;

#[derive(Debug, Parser)]
#[command(name = "tsp-anytime", version, about = "Anytime heuristic TSP solver")]
struct Cli {
    /// Instance files to solve, one after another.
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// Wall-clock budget per instance, in milliseconds.
    #[arg(long, default_value_t = 59_000)]
    budget_ms: u64,

    /// Emit a JSON report per instance instead of the human-readable block.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Per-instance run report for `--json` output.
#[derive(Debug, Serialize)]
struct RunReport {
    label: String,
    instance: String,
    budget_ms: u64,
    node_count: usize,
    started: String,
    finished: String,
    elapsed_seconds: f64,
    best_cost: Option<f64>,
    cycle_evaluations: u64,
    tour: Option<Vec<usize>>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    for path in &cli.instances {
        run_instance(path, cli.budget_ms, cli.json)?;
    }
    Ok(())
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run_instance(path: &Path, budget_ms: u64, json: bool) -> Result<()> {
    let label = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let instance = load_instance(path)
        .with_context(|| format!("failed to load instance {}", path.display()))?;
    info!("loaded {label}: {} nodes", instance.node_count());

    if !json {
        println!("========== {label} ==========");
    }

    let started = SystemTime::now();
    if !json {
        println!(
            "Started computing {label} at {}",
            humantime::format_rfc3339_millis(started)
        );
    }

    let mut solver = AnytimeSolver::new(&instance, budget_ms);
    solver.solve();

    let finished = SystemTime::now();
    let elapsed = finished
        .duration_since(started)
        .unwrap_or(Duration::ZERO)
        .as_secs_f64();

    if json {
        let report = RunReport {
            label,
            instance: path.display().to_string(),
            budget_ms,
            node_count: instance.node_count(),
            started: humantime::format_rfc3339_millis(started).to_string(),
            finished: humantime::format_rfc3339_millis(finished).to_string(),
            elapsed_seconds: elapsed,
            best_cost: solver.best_tour().is_some().then(|| solver.best_cost()),
            cycle_evaluations: solver.cycle_evaluations(),
            tour: solver.best_tour().map(Tour::into_nodes),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Finished computing {label} at {}",
        humantime::format_rfc3339_millis(finished)
    );
    println!("Elapsed time for {label}: {elapsed:.3} seconds");
    println!("Best tour cost: {:.2}", solver.best_cost());
    println!(
        "Cycles evaluated: {}",
        scientific(solver.cycle_evaluations())
    );
    match solver.best_tour() {
        Some(tour) => println!("Best tour nodes: {}", format_cycle(&tour)),
        None => println!("Best tour nodes: (no tour found within time limit)"),
    }
    println!();
    Ok(())
}

/// Formats a tour as comma-separated identifiers with the start node
/// repeated at the end, closing the cycle.
fn format_cycle(tour: &Tour) -> String {
    let mut out = String::new();
    for &node in tour.nodes() {
        out.push_str(&node.to_string());
        out.push_str(", ");
    }
    out.push_str(&tour[0].to_string());
    out
}

/// One-decimal scientific notation, e.g. `1.7e6`. Zero renders as `0e0`.
fn scientific(value: u64) -> String {
    if value == 0 {
        return "0e0".to_string();
    }
    let exponent = (value as f64).log10().floor() as i32;
    let mantissa = value as f64 / 10f64.powi(exponent);
    format!("{mantissa:.1}e{exponent}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scientific_zero() {
        assert_eq!(scientific(0), "0e0");
    }

    #[test]
    fn test_scientific_small() {
        assert_eq!(scientific(1), "1.0e0");
        assert_eq!(scientific(42), "4.2e1");
    }

    #[test]
    fn test_scientific_large() {
        assert_eq!(scientific(1_700_000), "1.7e6");
        assert_eq!(scientific(999), "10.0e2");
    }

    #[test]
    fn test_format_cycle_repeats_start() {
        let tour = Tour::from_nodes(vec![3, 1, 2]);
        assert_eq!(format_cycle(&tour), "3, 1, 2, 3");
    }
}
