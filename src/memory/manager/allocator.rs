/*!
 * Memory Allocator Implementation
 * Gap discovery, best-fit allocation and release
 */

use super::MemoryManager;
use crate::memory::types::{MemoryBlock, MemoryError, MemoryResult};
use crate::core::types::Size;
use tracing::{debug, error};

impl MemoryManager {
    /// Allocated blocks bracketed by the two sentinels
    fn bounded_blocks(&self) -> Vec<MemoryBlock> {
        let upper = self.memory_size + 1;
        let mut bounded = Vec::with_capacity(self.blocks.len() + 2);
        bounded.push(MemoryBlock::new(-1, -1));
        bounded.extend(self.blocks.values().copied());
        bounded.push(MemoryBlock::new(upper, upper));
        bounded
    }

    /// Every gap between consecutive blocks, empty ones included, in address order
    fn gaps(&self) -> impl Iterator<Item = MemoryBlock> {
        let bounded = self.bounded_blocks();
        (0..bounded.len() - 1)
            .map(move |i| MemoryBlock::gap_between(&bounded[i], &bounded[i + 1]))
    }

    /// Non-empty free ranges in address order
    pub fn free_gaps(&self) -> Vec<MemoryBlock> {
        self.gaps().filter(|gap| gap.size() > 0).collect()
    }

    /// Smallest free gap that can hold `size` addresses
    ///
    /// Equal-size candidates resolve to the lowest start address.
    pub fn find_free_block(&self, size: Size) -> Option<MemoryBlock> {
        if size <= 0 {
            return None;
        }
        self.gaps()
            .filter(|gap| gap.size() >= size)
            .min_by_key(|gap| (gap.size(), gap.start))
    }

    /// Reserve `size` addresses at the start of the best-fitting gap
    pub fn allocate(&mut self, size: Size) -> Option<MemoryBlock> {
        let Some(gap) = self.find_free_block(size) else {
            debug!(
                requested = size,
                available = self.capacity() - self.used(),
                "Allocation denied: no gap large enough"
            );
            return None;
        };

        let block = MemoryBlock::at(gap.start, size);
        self.blocks.insert(block.start, block);
        debug!(
            requested = size,
            gap = %gap,
            block = %block,
            "Allocated block from best-fit gap"
        );
        Some(block)
    }

    /// Release a block previously returned by `allocate`
    pub fn release(&mut self, block: MemoryBlock) -> MemoryResult<()> {
        match self.blocks.get(&block.start) {
            Some(tracked) if *tracked == block => {
                self.blocks.remove(&block.start);
                debug!(block = %block, "Released block");
                Ok(())
            }
            _ => {
                error!(block = %block, "Attempted to release a block that is not allocated");
                Err(MemoryError::BlockNotFound {
                    start: block.start,
                    end: block.end,
                })
            }
        }
    }
}
