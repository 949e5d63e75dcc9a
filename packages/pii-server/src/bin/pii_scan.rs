//! Scan text for PII from the command line
//!
//! Prints the same `analysis` object that `/api/generate` returns.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pii_engine::DetectionMethod;
use pii_server::kernel::create_pii_detector;

#[derive(Parser)]
#[command(name = "pii-scan")]
#[command(about = "Detect PII in text and print the analysis as JSON")]
struct Cli {
    /// Text to scan
    #[arg(long, conflicts_with = "file")]
    text: Option<String>,

    /// File to scan (stdin when neither --text nor FILE is given)
    file: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Report UTF-8 byte offsets instead of character offsets
    #[arg(long)]
    byte_offsets: bool,

    /// Detection strategy
    #[arg(long, default_value = "pattern")]
    method: DetectionMethod,
}

fn read_input(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }

    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn main() -> Result<()> {
    // stdout carries the JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let text = read_input(&cli)?;

    let detector = create_pii_detector(cli.method)?;
    let mut analysis = detector.analyze(&text);
    if !cli.byte_offsets {
        analysis = analysis.to_char_offsets(&text);
    }

    let output = if cli.pretty {
        serde_json::to_string_pretty(&analysis)?
    } else {
        serde_json::to_string(&analysis)?
    };
    println!("{}", output);

    Ok(())
}
