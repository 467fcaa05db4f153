/*!
 * Dispatcher
 * Fixed set of cores fed from the admitted queue
 */

use super::cpu::Core;
use crate::core::types::{CoreId, Pid};
use crate::core::SimResult;
use crate::process::{ProcessResult, Queue};

/// The CPU: a fixed, ordered set of cores
#[derive(Debug, Clone)]
pub struct Dispatcher {
    cores: Vec<Core>,
}

impl Dispatcher {
    /// Build with `count` cores, numbered from zero
    pub fn new(count: usize) -> Self {
        Self {
            cores: (0..count).map(Core::new).collect(),
        }
    }

    pub fn cores(&self) -> &[Core] {
        &self.cores
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cores.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cores.is_empty()
    }

    pub fn has_idle_core(&self) -> bool {
        self.cores.iter().any(Core::is_idle)
    }

    pub fn idle_count(&self) -> usize {
        self.cores.iter().filter(|c| c.is_idle()).count()
    }

    /// Give each idle core, in core order, the first Ready process in `queue`
    ///
    /// Assigned processes stay queued; only their state changes. Returns the
    /// number of assignments made.
    pub fn distribute(&mut self, queue: &mut Queue) -> ProcessResult<usize> {
        let mut assigned = 0;
        for core in self.cores.iter_mut().filter(|c| c.is_idle()) {
            let Some(process) = queue.first_ready_mut() else {
                break;
            };
            if core.assign(process)? {
                assigned += 1;
            }
        }
        Ok(assigned)
    }

    /// Advance every core by one unit; completions come back in core order
    pub fn advance_all(&mut self, queue: &mut Queue) -> SimResult<Vec<Pid>> {
        self.cores
            .iter_mut()
            .filter_map(|core| core.advance(queue).transpose())
            .collect()
    }

    /// Free the core running `pid`, if any
    pub fn evict(&mut self, pid: Pid) -> Option<CoreId> {
        let core = self.cores.iter_mut().find(|c| c.current() == Some(pid))?;
        core.vacate();
        Some(core.id())
    }

    /// Core currently running `pid`
    pub fn core_of(&self, pid: Pid) -> Option<CoreId> {
        self.cores
            .iter()
            .find(|c| c.current() == Some(pid))
            .map(Core::id)
    }
}
