/*!
 * Block Partition
 *
 * Ordered sequence of blocks that exactly tiles the pool.
 *
 * ## Invariants
 *
 * Before and after every public memory operation:
 * - the first block starts at 0, each block starts where the previous one
 *   ends, and the last block ends at the pool capacity (no gaps, no
 *   overlaps);
 * - no two adjacent blocks are both free;
 * - an allocated block always carries a non-empty owner name;
 * - several non-adjacent blocks may share one owner (a process can hold
 *   multiple disjoint ranges).
 *
 * Blocks live in an index-stable `Vec` ordered by start address; splitting
 * and merging are insert/remove-at-index operations, not pointer patching.
 */

use super::types::{BlockState, MemoryBlock};
use crate::core::types::{OwnerName, Size};

/// The full ordered set of blocks covering the pool
#[derive(Debug, Clone)]
pub struct BlockPartition {
    blocks: Vec<MemoryBlock>,
    capacity: Size,
}

impl BlockPartition {
    /// Seed with a single free block spanning the whole pool
    ///
    /// A zero-capacity pool has no addresses to cover and seeds an empty
    /// partition.
    pub fn new(capacity: Size) -> Self {
        let blocks = if capacity == 0 {
            Vec::new()
        } else {
            vec![MemoryBlock::free(0, capacity)]
        };
        Self { blocks, capacity }
    }

    #[inline]
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    #[inline]
    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Total bytes held by free blocks
    pub fn total_free(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.len)
            .sum()
    }

    /// Largest single free block, 0 if none
    pub fn largest_free(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.is_free())
            .map(|b| b.len)
            .max()
            .unwrap_or(0)
    }

    /// Total bytes held by allocated blocks
    pub fn used_bytes(&self) -> Size {
        self.blocks
            .iter()
            .filter(|b| !b.is_free())
            .map(|b| b.len)
            .sum()
    }

    /// Bytes currently held by a named process
    pub fn owner_bytes(&self, owner: &OwnerName) -> Size {
        self.blocks
            .iter()
            .filter(|b| b.owner() == Some(owner))
            .map(|b| b.len)
            .sum()
    }

    /// Split the free block at `idx` into `[size, rest]`, both free
    ///
    /// Precondition: the block is free and strictly larger than `size`.
    pub(crate) fn split_free_block(&mut self, idx: usize, size: Size) {
        let block = &mut self.blocks[idx];
        debug_assert!(block.is_free());
        debug_assert!(block.len > size);

        let rest = MemoryBlock::free(block.start + size, block.len - size);
        block.len = size;
        self.blocks.insert(idx + 1, rest);
    }

    /// Turn the free block at `idx` over to `owner`
    pub(crate) fn assign(&mut self, idx: usize, owner: OwnerName) {
        let block = &mut self.blocks[idx];
        debug_assert!(block.is_free());
        block.state = BlockState::Allocated(owner);
    }

    /// Free every block held by `owner`; returns (bytes freed, block count)
    ///
    /// Does not coalesce; callers follow up with [`Self::coalesce`].
    pub(crate) fn release_owner(&mut self, owner: &OwnerName) -> (Size, usize) {
        let mut freed = 0;
        let mut count = 0;
        for block in &mut self.blocks {
            if block.owner() == Some(owner) {
                freed += block.len;
                count += 1;
                block.state = BlockState::Free;
            }
        }
        (freed, count)
    }

    /// Merge every run of adjacent free blocks; returns merged pair count
    ///
    /// One left-to-right pass, holding position after a merge so longer
    /// runs collapse into a single block.
    pub(crate) fn coalesce(&mut self) -> usize {
        let mut merged = 0;
        let mut i = 0;
        while i + 1 < self.blocks.len() {
            if self.blocks[i].is_free() && self.blocks[i + 1].is_free() {
                let absorbed = self.blocks.remove(i + 1);
                self.blocks[i].len += absorbed.len;
                merged += 1;
            } else {
                i += 1;
            }
        }
        merged
    }

    /// Replace the whole sequence (compaction rebuilds the layout)
    pub(crate) fn reset_blocks(&mut self, blocks: Vec<MemoryBlock>) {
        self.blocks = blocks;
    }

    /// Debug-build consistency check over all partition invariants
    pub(crate) fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        {
            if self.capacity == 0 {
                assert!(self.blocks.is_empty(), "blocks present in empty pool");
                return;
            }
            assert!(!self.blocks.is_empty(), "pool left uncovered");
            let mut cursor = 0;
            let mut prev_free = false;
            for block in &self.blocks {
                assert!(block.len > 0, "zero-length block at {}", block.start);
                assert_eq!(
                    block.start, cursor,
                    "gap or overlap at address {}",
                    block.start
                );
                match block.owner() {
                    Some(owner) => {
                        assert!(!owner.is_empty(), "unnamed owner at {}", block.start);
                        prev_free = false;
                    }
                    None => {
                        assert!(!prev_free, "adjacent free blocks at {}", block.start);
                        prev_free = true;
                    }
                }
                cursor += block.len;
            }
            assert_eq!(cursor, self.capacity, "blocks do not cover the pool");
        }
    }
}
