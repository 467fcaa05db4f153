/*!
 * Tact Simulator Library
 * Tick-driven simulation of processes competing for cores and memory
 */

pub mod core;
pub mod engine;
pub mod memory;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    AutorunConfig, Clock, ConfigError, Pid, SimConfig, SimError, SimResult, Tick,
};
pub use engine::{
    CoreStatus, Engine, FinishedRow, ProcessRow, SharedEngine, SimulationControl, Snapshot,
    TickReport,
};
pub use memory::{MemoryBlock, MemoryError, MemoryManager, MemoryStats};
pub use monitoring::init_tracing;
pub use process::{Demand, Process, ProcessFactory, ProcessState, Queue, WorkloadConfig};
pub use scheduler::{Core, Dispatcher};
