use crate::commands::{self, SimCommand};
use crate::diagnostics::FrameStats;
use crate::error::SimError;
use crate::init_config::ScriptEntry;
use crate::simulation::Simulation;

/// Step `frames` frames. Before each frame every script entry scheduled for
/// the current frame number is dispatched, in file order. `on_report` gets
/// stats every `report_every` frames and after the last one.
pub fn run_frames(
    simulation: &mut Simulation,
    script: &[ScriptEntry],
    frames: u64,
    report_every: u64,
    mut on_report: impl FnMut(&FrameStats),
) -> Result<(), SimError> {
    let mut pending: Vec<&ScriptEntry> = script.iter().collect();
    pending.sort_by_key(|entry| entry.frame);
    let mut pending = pending.into_iter().peekable();

    for done in 1..=frames {
        let frame = done - 1;
        while let Some(entry) = pending.next_if(|entry| entry.frame <= frame) {
            dispatch(simulation, entry.command.clone(), entry.frame)?;
        }

        simulation.step();

        if (report_every > 0 && done % report_every == 0) || done == frames {
            on_report(&FrameStats::capture(simulation));
        }
    }

    let skipped = pending.count();
    if skipped > 0 {
        tracing::warn!(skipped, frames, "script entries scheduled past the last frame");
    }
    Ok(())
}

fn dispatch(simulation: &mut Simulation, command: SimCommand, frame: u64) -> Result<(), SimError> {
    tracing::debug!(frame, ?command, "script");
    commands::process_command(command, simulation)?;
    Ok(())
}
