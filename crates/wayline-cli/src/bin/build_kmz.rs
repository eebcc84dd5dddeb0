//! CLI tool to build a route file from a mission description.
//!
//! Reads a JSON mission, builds both container documents and writes
//! `<out-dir>/<name>.kmz`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wayline_core::{build_kmz, RouteMission};

/// Build a wayline route file from a JSON mission description
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the mission JSON file
    mission: PathBuf,

    /// Directory to write the route file into
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,

    /// Route file name (without the .kmz extension)
    #[arg(long, default_value = "wayline")]
    name: String,
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

    let json = fs::read_to_string(&args.mission)
        .with_context(|| format!("reading {}", args.mission.display()))?;
    let mission: RouteMission =
        serde_json::from_str(&json).context("parsing mission description")?;

    let path = build_kmz(&args.out_dir, &args.name, &mission)?;
    println!("{}", path.display());
    Ok(())
}
