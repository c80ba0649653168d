//! Command-line entry point for `mdtab`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use mdtab::Table;
use tracing_subscriber::EnvFilter;

/// Convert a linear list of rows into a fixed-width markdown table.
///
/// Lines starting with `#` declare a new column; every other line becomes a
/// data cell of the most recently declared column.
#[derive(Debug, Parser)]
#[command(name = "mdtab", version, about)]
struct Cli {
    /// Input file; reads standard input when absent or `-`.
    file: Option<PathBuf>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match cli.file.as_deref() {
        Some(path) if path != Path::new("-") => Table::from_path(path)?,
        _ => Table::from_reader(io::stdin().lock())?,
    };

    // Stdout carries only the table; diagnostics go to stderr.
    io::stdout().lock().write_all(table.render().as_bytes())?;
    Ok(())
}
