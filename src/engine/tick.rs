/*!
 * Tick Cycle
 * One full simulation step
 */

use super::Engine;
use crate::core::{Pid, SimError, SimResult, Tick};
use serde::Serialize;
use tracing::{debug, info};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Clock value after the tick
    pub tick: Tick,
    /// Processes that finished their work, in core order
    pub completed: Vec<Pid>,
    /// Waiting processes admitted during the backfill sweep
    pub admitted_from_waiting: Vec<Pid>,
    /// Cores handed new work during this tick
    pub dispatched: usize,
}

impl Engine {
    /// Advance simulated time by one tick
    pub fn tick(&mut self) -> SimResult<TickReport> {
        let mut dispatched = 0;
        if self.dispatcher.has_idle_core() {
            dispatched += self.dispatcher.distribute(&mut self.admitted)?;
        }

        let completed = self.dispatcher.advance_all(&mut self.admitted)?;
        let tick = self.clock.increment();

        for &pid in &completed {
            let process = self.admitted.remove_by_id(pid).ok_or_else(|| {
                SimError::internal(format!("completed process {pid} is not in the admitted queue"))
            })?;
            info!(tick, pid, burst = process.burst(), "Process completed");
            self.retire(process)?;
        }

        let mut admitted_from_waiting = Vec::new();
        if !completed.is_empty() {
            admitted_from_waiting = self.retry_waiting()?;
            dispatched += self.dispatcher.distribute(&mut self.admitted)?;
        }

        debug!(
            tick,
            completed = completed.len(),
            readmitted = admitted_from_waiting.len(),
            dispatched,
            admitted = self.admitted.len(),
            waiting = self.waiting.len(),
            "Tick complete"
        );

        Ok(TickReport {
            tick,
            completed,
            admitted_from_waiting,
            dispatched,
        })
    }

    /// Run `n` ticks, stopping at the first error
    pub fn run(&mut self, n: usize) -> SimResult<Vec<TickReport>> {
        (0..n).map(|_| self.tick()).collect()
    }

    /// True when nothing is queued anywhere
    pub fn is_idle(&self) -> bool {
        self.admitted.is_empty() && self.waiting.is_empty()
    }
}
