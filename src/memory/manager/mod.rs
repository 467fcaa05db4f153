/*!
 * Memory Management
 *
 * Best-fit allocator over a bounded, contiguous address space.
 *
 * ## Model
 *
 * - The address space is `0..=memory_size`
 * - Only allocated blocks are tracked; free space is whatever lies between them
 * - Two sentinel blocks at `-1` and `memory_size + 1` bracket the tracked set, so the
 *   leading and trailing free ranges are computed the same way as inner gaps
 *
 * ## Allocation
 *
 * The smallest gap that fits the request wins; equal-size gaps resolve to the
 * lowest start address. Only the requested prefix of the gap is consumed.
 */

mod allocator;

use super::types::{MemoryBlock, MemoryStats};
use crate::core::types::{Address, Size};
use std::collections::BTreeMap;
use tracing::debug;

/// Memory manager
#[derive(Debug, Clone)]
pub struct MemoryManager {
    /// Allocated blocks keyed by start address
    pub(super) blocks: BTreeMap<Address, MemoryBlock>,
    /// Highest valid address
    pub(super) memory_size: Size,
}

impl MemoryManager {
    /// Create a manager for addresses `0..=memory_size`
    pub fn new(memory_size: Size) -> Self {
        debug!(memory_size, "Memory manager initialized with best-fit allocator");
        Self {
            blocks: BTreeMap::new(),
            memory_size,
        }
    }

    #[inline]
    pub fn memory_size(&self) -> Size {
        self.memory_size
    }

    /// Allocated blocks in address order
    pub fn blocks(&self) -> impl Iterator<Item = &MemoryBlock> + '_ {
        self.blocks.values()
    }

    pub fn allocated(&self) -> Vec<MemoryBlock> {
        self.blocks.values().copied().collect()
    }

    pub fn is_allocated(&self, block: &MemoryBlock) -> bool {
        self.blocks.get(&block.start) == Some(block)
    }

    /// Addresses in use
    pub fn used(&self) -> Size {
        self.blocks.values().map(MemoryBlock::size).sum()
    }

    /// Total number of addresses
    #[inline]
    pub fn capacity(&self) -> Size {
        self.memory_size + 1
    }

    pub fn stats(&self) -> MemoryStats {
        let gaps = self.free_gaps();
        let used = self.used();
        MemoryStats {
            total_memory: self.capacity(),
            used_memory: used,
            available_memory: self.capacity() - used,
            allocated_blocks: self.blocks.len(),
            free_gaps: gaps.len(),
            largest_gap: gaps.iter().map(MemoryBlock::size).max().unwrap_or(0),
        }
    }
}
