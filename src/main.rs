/*!
 * Tact Simulator - Main Entry Point
 *
 * Headless autorun host:
 * - Builds a shared engine from environment configuration
 * - Spawns processes at random and ticks on a fixed interval
 * - Logs a snapshot summary (or the full JSON snapshot) after every tick
 */

use miette::{IntoDiagnostic, Result};
use tactsim::{init_tracing, AutorunConfig, SharedEngine, SimConfig, SimulationControl};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing().into_diagnostic()?;

    info!("Tact simulator starting...");

    let config = SimConfig::from_env()?;
    let autorun = AutorunConfig::from_env()?;
    let engine = SharedEngine::new(config.clone())?;

    info!(
        memory_size = config.memory_size,
        cores = config.cores,
        interval_ms = autorun.interval.as_millis() as u64,
        spawn_rate = autorun.spawn_rate,
        "Simulation ready, press Ctrl+C to exit"
    );

    let mut interval = tokio::time::interval(autorun.interval);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                if let Err(e) = step(&engine, &autorun) {
                    error!(error = %e, "Simulation halted");
                    return Err(e.into());
                }
            }
            signal = tokio::signal::ctrl_c() => {
                signal.into_diagnostic()?;
                break;
            }
        }
    }

    let snapshot = engine.snapshot();
    info!(
        tick = snapshot.tick,
        finished = snapshot.finished_len,
        "Simulation stopped"
    );
    Ok(())
}

fn step(engine: &SharedEngine, autorun: &AutorunConfig) -> tactsim::SimResult<()> {
    engine.maybe_generate(autorun.spawn_rate)?;
    let report = engine.tick()?;
    let snapshot = engine.snapshot();

    if autorun.json_snapshots {
        match snapshot.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => error!(error = %e, "Failed to serialize snapshot"),
        }
        return Ok(());
    }

    let busy = snapshot.cores.iter().filter(|c| c.pid.is_some()).count();
    info!(
        tick = report.tick,
        completed = ?report.completed,
        admitted = snapshot.admitted_len,
        waiting = snapshot.waiting_len,
        finished = snapshot.finished_len,
        busy_cores = busy,
        memory_used = snapshot.memory_stats.used_memory,
        memory_total = snapshot.memory_stats.total_memory,
        "CPU: tact {}",
        report.tick
    );
    Ok(())
}
