/*!
 * Process Module
 * Process life cycle, scheduling order and queues
 */

pub mod factory;
pub mod ordering;
pub mod queue;
pub mod types;

// Re-exports
pub use factory::{ProcessFactory, WorkloadConfig};
pub use queue::Queue;
pub use types::{Demand, Process, ProcessError, ProcessResult, ProcessState};
