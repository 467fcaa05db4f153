/*!
 * Engine Snapshot
 * Read-only, serializable view of engine state for display collaborators
 */

use super::Engine;
use crate::core::{CoreId, Pid, Priority, Size, Tick, Work};
use crate::memory::{MemoryBlock, MemoryStats};
use crate::process::{Process, ProcessState};
use serde::Serialize;

/// Queue entry as shown in a process table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    pub name: String,
    pub id: Pid,
    pub state: ProcessState,
    pub burst: Work,
    pub work_required: Work,
    pub memory_request: Size,
    pub address: Option<MemoryBlock>,
    pub priority: Priority,
    pub arrival_tick: Tick,
}

impl ProcessRow {
    /// "burst / required"
    pub fn progress(&self) -> String {
        format!("{} / {}", self.burst, self.work_required)
    }
}

impl From<&Process> for ProcessRow {
    fn from(p: &Process) -> Self {
        Self {
            name: p.name().to_string(),
            id: p.id(),
            state: p.state(),
            burst: p.burst(),
            work_required: p.work_required(),
            memory_request: p.memory_request(),
            address: p.memory(),
            priority: p.priority(),
            arrival_tick: p.arrival_tick(),
        }
    }
}

/// Finished-list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinishedRow {
    pub id: Pid,
    pub name: String,
    pub state: ProcessState,
    pub burst: Work,
}

impl From<&Process> for FinishedRow {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id(),
            name: p.name().to_string(),
            state: p.state(),
            burst: p.burst(),
        }
    }
}

/// Core occupancy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreStatus {
    pub id: CoreId,
    pub pid: Option<Pid>,
    pub occupant: Option<String>,
}

/// Point-in-time engine state
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub tick: Tick,
    pub admitted: Vec<ProcessRow>,
    pub waiting: Vec<ProcessRow>,
    pub finished: Vec<FinishedRow>,
    pub cores: Vec<CoreStatus>,
    pub memory: Vec<MemoryBlock>,
    pub memory_stats: MemoryStats,
    pub admitted_len: usize,
    pub waiting_len: usize,
    pub finished_len: usize,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn find(&self, pid: Pid) -> Option<&ProcessRow> {
        self.admitted
            .iter()
            .chain(self.waiting.iter())
            .find(|row| row.id == pid)
    }
}

impl Engine {
    /// Capture current state without mutating anything
    pub fn snapshot(&self) -> Snapshot {
        let admitted: Vec<ProcessRow> = self.admitted.iter().map(ProcessRow::from).collect();
        let waiting: Vec<ProcessRow> = self.waiting.iter().map(ProcessRow::from).collect();
        let finished: Vec<FinishedRow> = self.finished.iter().map(FinishedRow::from).collect();
        let cores = self
            .dispatcher
            .cores()
            .iter()
            .map(|core| CoreStatus {
                id: core.id(),
                pid: core.current(),
                occupant: core
                    .current()
                    .and_then(|pid| self.admitted.get(pid))
                    .map(|p| p.name().to_string()),
            })
            .collect();

        Snapshot {
            tick: self.clock.now(),
            admitted_len: admitted.len(),
            waiting_len: waiting.len(),
            finished_len: finished.len(),
            admitted,
            waiting,
            finished,
            cores,
            memory: self.memory.allocated(),
            memory_stats: self.memory.stats(),
        }
    }
}
