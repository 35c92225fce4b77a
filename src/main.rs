use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use charge_sim::app::{self, RunOptions};

/// Headless runner for the charged particle simulation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Scenario file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of frames to step
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Report stats every N frames (0 reports only the last frame)
    #[arg(short, long, default_value_t = 60)]
    report_every: u64,

    /// Print stats as JSON lines on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    app::run(&RunOptions {
        config: args.config,
        frames: args.frames,
        report_every: args.report_every,
        json: args.json,
    })
}
