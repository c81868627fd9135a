//! CLI entry point for the hill-climbing solver.
//!
//! Usage:
//!   hill-climb solve <input.txt> [options]
//!   hill-climb solve --stdin [options]
//!
//! Options:
//!   --part <1|2>   Solve a single part (default: both)
//!   --json         Print a JSON report instead of plain text
//!
//! Exit codes: 0 when every requested part is reachable, 1 when any part is
//! unreachable, 2 when the input cannot be read or parsed.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;

use hill_climb::{logging, parse_height_map, solve, Answer, Part};

#[derive(Parser)]
#[command(name = "hill-climb")]
#[command(about = "Fewest steps up an elevation grid")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a heightmap puzzle
    Solve {
        /// Path to the puzzle input (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read the puzzle from stdin instead of a file
        #[arg(long, conflicts_with = "file")]
        stdin: bool,

        /// Solve only this part
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=2))]
        part: Option<u8>,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

/// JSON report for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    answers: Vec<Answer>,
    time_elapsed_ms: u64,
}

fn read_input(file: Option<PathBuf>, stdin: bool) -> anyhow::Result<String> {
    if stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read from stdin")?;
        Ok(buffer)
    } else if let Some(path) = file {
        fs::read_to_string(&path).with_context(|| format!("failed to read {}", path.display()))
    } else {
        bail!("must provide either a file path or --stdin");
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Solve {
            file,
            stdin,
            part,
            json,
        } => {
            let start_time = Instant::now();

            let text = read_input(file, stdin)?;
            let map = parse_height_map(&text).context("invalid puzzle input")?;
            debug!(
                rows = map.grid.rows(),
                cols = map.grid.cols(),
                start = ?map.start,
                end = ?map.end,
                "parsed heightmap"
            );

            let parts = match part {
                Some(number) => match Part::from_number(number) {
                    Some(part) => vec![part],
                    None => bail!("unknown part {number}, expected 1 or 2"),
                },
                None => Part::ALL.to_vec(),
            };
            let answers: Vec<Answer> = parts.into_iter().map(|p| solve(&map, p)).collect();

            if json {
                let output = SolveOutput {
                    answers: answers.clone(),
                    time_elapsed_ms: start_time.elapsed().as_millis() as u64,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                for answer in &answers {
                    println!("{answer}");
                }
            }

            if answers.iter().all(Answer::is_reachable) {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}
