/*!
 * CPU Core
 * Single execution unit with non-preemptive occupancy
 */

use crate::core::types::{CoreId, Pid};
use crate::core::{SimError, SimResult};
use crate::process::{Process, ProcessResult, ProcessState, Queue};
use serde::Serialize;
use tracing::{debug, error};

/// One core
///
/// Holds the id of its occupant; the process itself stays in the admitted queue.
#[derive(Debug, Clone, Serialize)]
pub struct Core {
    id: CoreId,
    current: Option<Pid>,
}

impl Core {
    pub const fn new(id: CoreId) -> Self {
        Self { id, current: None }
    }

    #[inline]
    pub const fn id(&self) -> CoreId {
        self.id
    }

    #[inline]
    pub const fn current(&self) -> Option<Pid> {
        self.current
    }

    #[inline(always)]
    pub const fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    /// Occupy this core with `process` and mark it Running
    ///
    /// Returns false without touching the process if the core is busy.
    pub fn assign(&mut self, process: &mut Process) -> ProcessResult<bool> {
        if self.current.is_some() {
            return Ok(false);
        }
        process.transition(ProcessState::Running)?;
        self.current = Some(process.id());
        debug!(core = self.id, pid = process.id(), "Assigned process to core");
        Ok(true)
    }

    /// One unit of work for the occupant
    ///
    /// Returns the occupant's id when this tick completed it; the core is idle
    /// again afterwards. An occupant missing from `queue` is an internal error.
    pub fn advance(&mut self, queue: &mut Queue) -> SimResult<Option<Pid>> {
        let Some(pid) = self.current else {
            return Ok(None);
        };
        let Some(process) = queue.get_mut(pid) else {
            error!(core = self.id, pid, "Core occupant missing from the admitted queue");
            return Err(SimError::internal(format!(
                "core {} runs process {pid} which is not queued",
                self.id
            )));
        };

        process.advance();
        if process.is_done() {
            self.current = None;
            debug!(
                core = self.id,
                pid,
                burst = process.burst(),
                "Process finished its work"
            );
            return Ok(Some(pid));
        }
        Ok(None)
    }

    /// Drop the occupant without completing it
    pub(crate) fn vacate(&mut self) -> Option<Pid> {
        self.current.take()
    }
}
