/*!
 * Simulation Limits and Defaults
 *
 * Centralized location for the default sizes and ranges the simulator starts with.
 * Everything here can be overridden through `SimConfig`.
 */

use super::types::{Priority, Size, Work};
use std::ops::RangeInclusive;

// =============================================================================
// MEMORY
// =============================================================================

/// Highest address of the simulated address space (addresses run 0..=DEFAULT_MEMORY_SIZE)
pub const DEFAULT_MEMORY_SIZE: Size = 128;

/// Largest accepted memory size; keeps the upper sentinel and capacity sums in range
pub const MAX_MEMORY_SIZE: Size = 1 << 40;

// =============================================================================
// CPU
// =============================================================================

/// Number of cores the dispatcher is built with
pub const DEFAULT_CORES: usize = 4;

// =============================================================================
// WORKLOAD GENERATION
// =============================================================================

pub const DEFAULT_PRIORITY_RANGE: RangeInclusive<Priority> = 1..=10;

pub const DEFAULT_WORK_RANGE: RangeInclusive<Work> = 1..=10;

pub const DEFAULT_MEMORY_RANGE: RangeInclusive<Size> = 1..=32;

/// Nouns used to build display names ("hack<Noun>.exe")
pub const PROCESS_NAME_NOUNS: &[&str] = &[
    "Pentagon", "Hacker", "Life", "Military", "Python", "World", "USA", "Windows", "Linux",
];

// =============================================================================
// AUTORUN
// =============================================================================

/// Default delay between ticks in autorun mode (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1024;

/// Fastest autorun speed
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Slowest autorun speed
pub const MAX_TICK_INTERVAL_MS: u64 = 16384;

/// Chance of generating a new process on each autorun tick
pub const DEFAULT_SPAWN_RATE: f64 = 0.5;
