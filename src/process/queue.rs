/*!
 * Process Queue
 * Scheduling-ordered collection with lookup by id
 */

use super::ordering;
use super::types::Process;
use crate::core::types::Pid;

/// Ordered process queue
///
/// Re-sorted on every insert and removal.
#[derive(Debug, Default, Clone)]
pub struct Queue {
    processes: Vec<Process>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append then re-sort
    pub fn insert(&mut self, process: Process) {
        self.processes.push(process);
        self.reschedule();
    }

    fn reschedule(&mut self) {
        self.processes.sort_by(ordering::compare);
    }

    /// First Ready process in queue order
    ///
    /// Scans the whole queue: states change in place after insertion, so Ready
    /// entries are not guaranteed to be contiguous.
    pub fn first_ready(&self) -> Option<&Process> {
        self.processes.iter().find(|p| p.is_ready())
    }

    pub fn first_ready_mut(&mut self) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.is_ready())
    }

    fn position(&self, pid: Pid) -> Option<usize> {
        self.processes.iter().position(|p| p.id() == pid)
    }

    /// Remove and terminate the process with `pid`
    pub fn remove_by_id(&mut self, pid: Pid) -> Option<Process> {
        let mut process = self.take_by_id(pid)?;
        process.terminate();
        Some(process)
    }

    /// Remove the process with `pid`, leaving its state untouched
    pub fn take_by_id(&mut self, pid: Pid) -> Option<Process> {
        let idx = self.position(pid)?;
        let process = self.processes.remove(idx);
        self.reschedule();
        Some(process)
    }

    pub fn get(&self, pid: Pid) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == pid)
    }

    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.id() == pid)
    }

    pub fn contains(&self, pid: Pid) -> bool {
        self.position(pid).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> + '_ {
        self.processes.iter()
    }

    pub fn ids(&self) -> Vec<Pid> {
        self.processes.iter().map(Process::id).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
