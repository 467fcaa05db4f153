/*!
 * Memory Types
 * Common types for memory management
 */

use crate::core::types::{Address, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("Memory block {start}-{end} is not allocated")]
    #[diagnostic(
        code(memory::block_not_found),
        help("Only blocks returned by allocate() can be released, and only once. This is an engine bug.")
    )]
    BlockNotFound { start: Address, end: Address },
}

/// Contiguous, inclusive address range
///
/// Ordering is by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub start: Address,
    pub end: Address,
}

impl MemoryBlock {
    #[inline]
    pub const fn new(start: Address, end: Address) -> Self {
        Self { start, end }
    }

    /// Block of `size` addresses beginning at `start`
    #[inline]
    pub const fn at(start: Address, size: Size) -> Self {
        Self {
            start,
            end: start + size - 1,
        }
    }

    /// Free range strictly between two blocks (empty when they touch)
    #[inline]
    pub(crate) const fn gap_between(lower: &MemoryBlock, upper: &MemoryBlock) -> Self {
        Self {
            start: lower.end + 1,
            end: upper.start - 1,
        }
    }

    #[inline(always)]
    pub const fn size(&self) -> Size {
        self.end - self.start + 1
    }

    #[inline]
    pub const fn overlaps(&self, other: &MemoryBlock) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}-{})", self.start, self.end)
    }
}

/// Memory statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub allocated_blocks: usize,
    /// Number of non-empty free gaps
    pub free_gaps: usize,
    pub largest_gap: Size,
}

impl MemoryStats {
    pub fn usage_percentage(&self) -> f64 {
        if self.total_memory == 0 {
            return 0.0;
        }
        (self.used_memory as f64 / self.total_memory as f64) * 100.0
    }
}
