use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use eyre::{Result, WrapErr};
use tracing_subscriber::EnvFilter;

/// Advent of Code 2024 solvers.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Total distance and similarity score of the two location lists.
    Day1 {
        /// Path to the puzzle input.
        input: PathBuf,
    },
    /// Safe report counts, without and with the Problem Dampener.
    Day2 {
        /// Path to the puzzle input.
        input: PathBuf,
    },
    /// Sums of the `mul` products in the corrupted memory.
    Day3 {
        /// Path to the puzzle input.
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();
    match Cli::parse().command {
        Command::Day1 { input } => {
            let (part1, part2) = aoc2024::day1::solve(&read(&input)?)?;
            report(part1, part2);
        }
        Command::Day2 { input } => {
            let (part1, part2) = aoc2024::day2::solve(&read(&input)?)?;
            report(part1, part2);
        }
        Command::Day3 { input } => {
            let (part1, part2) = aoc2024::day3::solve(&read(&input)?);
            report(part1, part2);
        }
    }
    Ok(())
}

/// Routes `RUST_LOG`-filtered diagnostics to stderr, keeping stdout for the
/// answers.
fn init_logging() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn report(part1: impl Display, part2: impl Display) {
    println!("part1: {part1}");
    println!("part2: {part2}");
}
