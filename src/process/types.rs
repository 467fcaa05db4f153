/*!
 * Process Types
 * Life-cycle state machine and per-process bookkeeping
 */

use crate::core::types::{Pid, Priority, Size, Tick, Work};
use crate::memory::MemoryBlock;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Process operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum ProcessError {
    #[error("Invalid state transition for process {pid}: {from} -> {to}")]
    #[diagnostic(
        code(process::invalid_transition),
        help("Terminated is absorbing; Running is only reachable from Ready.")
    )]
    InvalidStateTransition {
        pid: Pid,
        from: ProcessState,
        to: ProcessState,
    },
}

/// Process state
///
/// Declaration order is the scheduling order: running work sorts first,
/// terminated work last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Holds a core
    Running,
    /// Holds memory, waiting for a core
    Ready,
    /// Created, not yet admitted
    New,
    /// Denied memory, waiting for a retry
    Waiting,
    /// Completed or cancelled
    Terminated,
}

impl ProcessState {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Ready => "ready",
            Self::New => "new",
            Self::Waiting => "waiting",
            Self::Terminated => "terminated",
        }
    }

    /// Whether `self -> to` is a legal life-cycle step
    pub const fn can_transition_to(self, to: ProcessState) -> bool {
        use ProcessState::*;
        matches!(
            (self, to),
            (New, Ready)
                | (New, Waiting)
                | (Waiting, Ready)
                | (Ready, Running)
                | (New | Ready | Running | Waiting, Terminated)
        )
    }

    /// Memory is held exactly in these states
    #[inline]
    pub const fn holds_memory(self) -> bool {
        matches!(self, Self::Ready | Self::Running)
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource demand of a workload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demand {
    pub priority: Priority,
    pub work: Work,
    pub memory: Size,
}

impl Demand {
    pub const fn new(priority: Priority, work: Work, memory: Size) -> Self {
        Self {
            priority,
            work,
            memory,
        }
    }
}

/// A simulated workload
#[derive(Debug, Clone, Serialize)]
pub struct Process {
    id: Pid,
    name: String,
    arrival_tick: Tick,
    priority: Priority,
    work_required: Work,
    memory_request: Size,
    burst: Work,
    state: ProcessState,
    memory: Option<MemoryBlock>,
}

impl Process {
    /// Fully initialized process in the `New` state
    pub fn new(id: Pid, name: impl Into<String>, arrival_tick: Tick, demand: Demand) -> Self {
        Self {
            id,
            name: name.into(),
            arrival_tick,
            priority: demand.priority,
            work_required: demand.work.max(1),
            memory_request: demand.memory.max(1),
            burst: 0,
            state: ProcessState::New,
            memory: None,
        }
    }

    #[inline(always)]
    pub fn id(&self) -> Pid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn arrival_tick(&self) -> Tick {
        self.arrival_tick
    }

    #[inline]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    #[inline]
    pub fn work_required(&self) -> Work {
        self.work_required
    }

    #[inline]
    pub fn memory_request(&self) -> Size {
        self.memory_request
    }

    #[inline]
    pub fn burst(&self) -> Work {
        self.burst
    }

    #[inline(always)]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn memory(&self) -> Option<MemoryBlock> {
        self.memory
    }

    #[inline(always)]
    pub fn is_done(&self) -> bool {
        self.burst >= self.work_required
    }

    #[inline(always)]
    pub fn is_ready(&self) -> bool {
        self.state == ProcessState::Ready
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.state == ProcessState::Terminated
    }

    /// Scheduling key: state, then shortest work, priority, arrival, id
    #[inline]
    pub fn sched_key(&self) -> (ProcessState, Work, Priority, Tick, Pid) {
        (
            self.state,
            self.work_required,
            self.priority,
            self.arrival_tick,
            self.id,
        )
    }

    /// Move to `to`, rejecting steps the life cycle does not allow
    pub fn transition(&mut self, to: ProcessState) -> ProcessResult<()> {
        if !self.state.can_transition_to(to) {
            return Err(ProcessError::InvalidStateTransition {
                pid: self.id,
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Any state may end here; Terminated stays Terminated
    pub(crate) fn terminate(&mut self) {
        self.state = ProcessState::Terminated;
    }

    pub(crate) fn attach_memory(&mut self, block: MemoryBlock) {
        debug_assert!(self.memory.is_none(), "process {} already holds memory", self.id);
        self.memory = Some(block);
    }

    pub(crate) fn detach_memory(&mut self) -> Option<MemoryBlock> {
        self.memory.take()
    }

    /// One unit of progress
    pub(crate) fn advance(&mut self) {
        self.burst = self.burst.saturating_add(1);
    }
}
