/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Address type for the simulated address space
///
/// Signed so that the sentinel below address zero can be expressed directly.
pub type Address = i64;

/// Size type for memory requests and gaps
pub type Size = i64;

/// Simulated time, counted in ticks
pub type Tick = u64;

/// Scheduling priority (lower value is scheduled first)
pub type Priority = u32;

/// Units of work a process needs or has accumulated
pub type Work = u32;

/// Core identifier
pub type CoreId = usize;
