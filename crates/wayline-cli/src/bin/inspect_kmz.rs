//! CLI tool to inspect a route file.
//!
//! Parses both container documents out of a .kmz and dumps the decoded tree
//! as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayline_core::read_kmz_file;

/// Decode a wayline route file and print its documents as JSON
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the .kmz route file
    file: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wayline_core=debug".parse()?),
        )
        .init();

    let args = Args::parse();

    let docs = read_kmz_file(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    println!("{}", serde_json::to_string_pretty(&docs)?);
    Ok(())
}
