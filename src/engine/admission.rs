/*!
 * Admission Control
 * Creation, memory admission, re-admission and cancellation of processes
 */

use super::Engine;
use crate::core::{Pid, SimError, SimResult, Size};
use crate::process::{Demand, Process, ProcessState};
use tracing::{debug, error, info};

impl Engine {
    /// Reserve memory for a new process and queue it as Ready or Waiting
    pub(super) fn admit(&mut self, mut process: Process) -> SimResult<Pid> {
        let pid = process.id();
        match self.memory.allocate(process.memory_request()) {
            Some(block) => {
                process.attach_memory(block);
                process.transition(ProcessState::Ready)?;
                info!(
                    pid,
                    name = process.name(),
                    block = %block,
                    work = process.work_required(),
                    "Process admitted"
                );
                self.admitted.insert(process);
            }
            None => {
                process.transition(ProcessState::Waiting)?;
                info!(
                    pid,
                    name = process.name(),
                    requested = process.memory_request(),
                    "Process waiting for memory"
                );
                self.waiting.insert(process);
            }
        }
        Ok(pid)
    }

    /// Create and admit one process with an explicit demand
    pub fn submit(&mut self, demand: Demand) -> SimResult<Pid> {
        let process = self.factory.build(demand, self.clock.now());
        self.admit(process)
    }

    /// Create and admit `n` processes with random demands
    pub fn generate(&mut self, n: usize) -> SimResult<Vec<Pid>> {
        let mut pids = Vec::with_capacity(n);
        for _ in 0..n {
            let process = self.factory.generate(self.clock.now());
            pids.push(self.admit(process)?);
        }
        Ok(pids)
    }

    /// Terminate `pid` wherever it is queued and reclaim its resources
    ///
    /// Returns `false` if no queued process has that id.
    pub fn cancel(&mut self, pid: Pid) -> SimResult<bool> {
        let Some(process) = self
            .admitted
            .remove_by_id(pid)
            .or_else(|| self.waiting.remove_by_id(pid))
        else {
            debug!(pid, "Cancel ignored: process not queued");
            return Ok(false);
        };

        if let Some(core) = self.dispatcher.evict(pid) {
            debug!(pid, core, "Vacated core of cancelled process");
        }
        self.retire(process)?;
        info!(pid, "Process cancelled");
        Ok(true)
    }

    /// Release memory of a terminated process and record it as finished
    pub(super) fn retire(&mut self, mut process: Process) -> SimResult<()> {
        debug_assert!(process.is_terminated());
        if let Some(block) = process.detach_memory() {
            self.memory.release(block).map_err(|e| {
                error!(pid = process.id(), error = %e, "Memory accounting is inconsistent");
                SimError::from(e)
            })?;
        }
        self.finished.push(process);
        Ok(())
    }

    /// Retry admission for waiting processes in scheduling order
    ///
    /// Returns the ids moved to the admitted queue.
    pub fn retry_waiting(&mut self) -> SimResult<Vec<Pid>> {
        let candidates: Vec<(Pid, Size)> = self
            .waiting
            .iter()
            .map(|p| (p.id(), p.memory_request()))
            .collect();

        let mut moved = Vec::new();
        for (pid, request) in candidates {
            let Some(block) = self.memory.allocate(request) else {
                continue;
            };
            let Some(mut process) = self.waiting.take_by_id(pid) else {
                self.memory.release(block)?;
                return Err(SimError::internal(format!(
                    "process {pid} vanished from the waiting queue during retry"
                )));
            };
            process.attach_memory(block);
            process.transition(ProcessState::Ready)?;
            info!(pid, block = %block, "Waiting process admitted");
            self.admitted.insert(process);
            moved.push(pid);
        }
        Ok(moved)
    }
}
