// Evnames CLI
// Scans a linux/input.h style header and prints a generated lookup table

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use evnames_core::{extract_from_path, render, OutputFormat};

/// Generate event-code name tables from linux/input.h
#[derive(Parser, Debug)]
#[command(name = "evnames")]
#[command(about = "Generate event-code name tables from linux/input.h", long_about = None)]
struct Args {
    /// Header file to scan for #define lines
    #[arg(value_name = "HEADER", default_value = "/usr/include/linux/input.h")]
    header: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "c")]
    output: Format,

    /// Write the artifact to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    out: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    /// C header with static lookup arrays
    C,
    /// Python module with bidirectional mappings
    Python,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::C => OutputFormat::C,
            Format::Python => OutputFormat::Python,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let constants = extract_from_path(&args.header)
        .with_context(|| format!("cannot scan {}", args.header.display()))?;
    log::debug!(
        "classified defines into {} categories",
        constants.category_count()
    );

    let artifact = render(&constants, args.output.into());

    match &args.out {
        Some(path) => fs::write(path, artifact)
            .with_context(|| format!("cannot write {}", path.display()))?,
        None => io::stdout()
            .write_all(artifact.as_bytes())
            .context("cannot write to stdout")?,
    }

    Ok(())
}
