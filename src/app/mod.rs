use std::path::PathBuf;

use anyhow::Context;

use crate::diagnostics::FrameStats;
use crate::init_config::InitConfig;

pub mod simulation_loop;
pub mod spawn;

/// What the headless runner should do.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Scenario file; an empty simulation with defaults when `None`.
    pub config: Option<PathBuf>,
    pub frames: u64,
    pub report_every: u64,
    /// Emit stats as JSON lines on stdout instead of log lines.
    pub json: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config: None,
            frames: 600,
            report_every: 60,
            json: false,
        }
    }
}

/// Load the scenario, run it and report as requested.
pub fn run(options: &RunOptions) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => InitConfig::load_from_file(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => InitConfig::default(),
    };

    let mut simulation = spawn::build_simulation(&config).context("building simulation")?;

    let mut write_error = None;
    simulation_loop::run_frames(
        &mut simulation,
        &config.script,
        options.frames,
        options.report_every,
        |stats| {
            if options.json {
                if let Err(error) = print_json(stats) {
                    write_error.get_or_insert(error);
                }
            } else {
                log_stats(stats);
            }
        },
    )
    .context("running scenario")?;

    if let Some(error) = write_error {
        return Err(error.context("writing stats"));
    }

    #[cfg(feature = "profiling")]
    crate::PROFILER.lock().log_and_clear();

    Ok(())
}

fn print_json(stats: &FrameStats) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(stats)?);
    Ok(())
}

fn log_stats(stats: &FrameStats) {
    tracing::info!(
        frame = stats.frame,
        particles = stats.particles,
        collisions = stats.total_collisions,
        kinetic_energy = stats.kinetic_energy,
        momentum_x = stats.momentum_x,
        momentum_y = stats.momentum_y,
        multiplier = stats.force_multiplier,
        "frame"
    );
}
