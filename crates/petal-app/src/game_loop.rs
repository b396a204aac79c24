//! Engine loop: advances the engine tick by tick and streams snapshots as
//! JSON lines.
//!
//! In realtime mode ticks are paced at `TICK_RATE`; otherwise the loop runs
//! as fast as it can.

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use petal_core::constants::TICK_RATE;
use petal_core::state::PetalSystemState;
use petal_sim::engine::PetalEngine;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Number of ticks to run.
    pub ticks: u64,
    /// Write a snapshot every N ticks. Zero writes only the final one.
    pub emit_every: u64,
    /// Pace ticks in wall-clock time.
    pub realtime: bool,
}

/// Run the engine and return the final snapshot, which is always written.
pub fn run<W: Write>(
    engine: &mut PetalEngine,
    options: LoopOptions,
    out: &mut W,
) -> io::Result<PetalSystemState> {
    info!(ticks = options.ticks, realtime = options.realtime, "engine loop started");

    let mut next_tick_time = Instant::now();
    let mut snapshot = engine.snapshot();
    let mut last_written = None;

    for n in 1..=options.ticks {
        snapshot = engine.tick();

        if options.emit_every > 0 && n % options.emit_every == 0 {
            write_snapshot(out, &snapshot)?;
            last_written = Some(n);
        }

        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, reset to avoid catch-up spiral
                debug!(tick = n, "loop fell behind, resetting pace");
                next_tick_time = now;
            }
        }
    }

    if last_written != Some(options.ticks) {
        write_snapshot(out, &snapshot)?;
    }
    out.flush()?;

    info!(
        petals = snapshot.petals.len(),
        actions = snapshot.actions.len(),
        tick = snapshot.last_updated.tick,
        "engine loop finished"
    );
    Ok(snapshot)
}

fn write_snapshot<W: Write>(out: &mut W, snapshot: &PetalSystemState) -> io::Result<()> {
    serde_json::to_writer(&mut *out, snapshot)?;
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_core::commands::SimCommand;
    use petal_core::enums::ActionType;
    use petal_core::types::Vector3;
    use petal_sim::engine::SimConfig;

    fn lines(buffer: &[u8]) -> Vec<PetalSystemState> {
        std::str::from_utf8(buffer)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_emits_every_n_ticks() {
        let mut engine = PetalEngine::new(SimConfig::default());
        let mut buffer = Vec::new();
        let options = LoopOptions {
            ticks: 10,
            emit_every: 3,
            realtime: false,
        };
        let last = run(&mut engine, options, &mut buffer).unwrap();

        let snapshots = lines(&buffer);
        let ticks: Vec<u64> = snapshots.iter().map(|s| s.last_updated.tick).collect();
        assert_eq!(ticks, vec![3, 6, 9, 10]);
        assert_eq!(last.last_updated.tick, 10);
    }

    #[test]
    fn test_final_snapshot_not_duplicated() {
        let mut engine = PetalEngine::new(SimConfig::default());
        let mut buffer = Vec::new();
        let options = LoopOptions {
            ticks: 4,
            emit_every: 2,
            realtime: false,
        };
        run(&mut engine, options, &mut buffer).unwrap();
        assert_eq!(lines(&buffer).len(), 2);
    }

    #[test]
    fn test_only_final_when_emit_disabled() {
        let mut engine = PetalEngine::new(SimConfig::default());
        engine.queue_command(SimCommand::SubmitAction {
            kind: ActionType::Grow,
            position: Vector3::ZERO,
            intensity: Some(1.0),
            user_id: None,
        });
        let mut buffer = Vec::new();
        let options = LoopOptions {
            ticks: 5,
            emit_every: 0,
            realtime: false,
        };
        run(&mut engine, options, &mut buffer).unwrap();

        let snapshots = lines(&buffer);
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].petals.len(), 7);
        assert_eq!(snapshots[0].actions.len(), 1);
    }

    #[test]
    fn test_zero_ticks_writes_current_state() {
        let mut engine = PetalEngine::new(SimConfig::default());
        let mut buffer = Vec::new();
        let options = LoopOptions {
            ticks: 0,
            emit_every: 1,
            realtime: false,
        };
        run(&mut engine, options, &mut buffer).unwrap();

        let snapshots = lines(&buffer);
        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].last_updated.tick, 0);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
