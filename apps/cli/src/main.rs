//! # till
//!
//! Command-line shell around `till-core`.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          till (CLI)                             │
//! │                                                                 │
//! │  file / stdin ──► lines ──► till-core ──► receipt ──► stdout    │
//! │                                               │                 │
//! │                                               └──► logs: stderr │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input lines are handed to the core untouched: no pre-filtering, no
//! trimming. Malformed purchase lines are the core's business (it skips
//! them); the only errors this binary can exit with are I/O errors.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "till",
    version,
    about = "Itemized sales-tax receipts from purchase lines"
)]
struct Cli {
    /// Input file with one purchase line per row (stdin when omitted)
    input: Option<PathBuf>,

    /// Emit the structured receipt as JSON instead of the text layout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays a clean receipt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let lines = read_lines(cli.input.as_deref())?;
    info!(lines = lines.len(), "input read");

    let receipt = till_core::build_receipt(&lines);
    debug!(
        items = receipt.len(),
        skipped = lines.len() - receipt.len(),
        "receipt built"
    );

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&receipt)?);
    } else {
        println!("{}", till_core::format_receipt(&receipt));
    }

    Ok(())
}

/// Reads all input lines in order, from a file or stdin.
fn read_lines(input: Option<&Path>) -> anyhow::Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    reader
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed reading input lines")
}
