/*!
 * Compaction
 * Packs allocated blocks to the front of the pool
 */

use super::super::types::{BlockState, MemoryBlock};
use super::MemoryManager;
use crate::core::types::Size;
use log::info;

impl MemoryManager {
    /// Relocate every allocated block toward address 0, preserving relative
    /// order, and fold the remaining space into one trailing free block
    ///
    /// Block contents move with their blocks: each relocated range is
    /// copied inside the pool (overlap-safe, since a block only ever slides
    /// toward lower addresses). Idempotent, and always succeeds; returns
    /// the size of the trailing free block.
    pub fn compact(&mut self) -> Size {
        let Self { pool, partition } = self;
        let capacity = partition.capacity();

        let mut packed = Vec::with_capacity(partition.len());
        let mut next_free = 0;
        let mut moved = 0usize;
        for block in partition.blocks() {
            if let BlockState::Allocated(owner) = &block.state {
                if block.start != next_free {
                    pool.relocate(block.start, next_free, block.len);
                    moved += 1;
                }
                packed.push(MemoryBlock::allocated(next_free, block.len, owner.clone()));
                next_free += block.len;
            }
        }

        let reclaimed = capacity - next_free;
        if reclaimed > 0 {
            packed.push(MemoryBlock::free(next_free, reclaimed));
        }
        partition.reset_blocks(packed);

        info!(
            "Compaction relocated {} blocks; {} bytes form the trailing free block",
            moved, reclaimed
        );
        partition.debug_validate();
        reclaimed
    }
}
