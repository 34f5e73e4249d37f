/*!
 * Memory Traits
 * Seams between the command layer and the allocation core
 */

use super::types::*;
use crate::core::types::{Address, OwnerName, Size};

/// Memory allocator interface
pub trait Allocator {
    /// Allocate `size` bytes for a named process using the given policy,
    /// returning the start address of the new block
    fn allocate(
        &mut self,
        owner: OwnerName,
        size: Size,
        policy: PlacementPolicy,
    ) -> MemoryResult<Address>;
}

/// Process memory cleanup
pub trait ProcessMemoryCleanup {
    /// Free every block held by a named process, returning the bytes freed
    fn release(&mut self, owner: &OwnerName) -> MemoryResult<Size>;
}

/// Compaction interface
pub trait Compaction {
    /// Pack allocated blocks to the front of the pool, folding all free
    /// space into a single trailing block; returns the size of that block
    fn compact(&mut self) -> Size;
}

/// Memory statistics provider
pub trait MemoryInfo {
    /// Get overall memory statistics
    fn stats(&self) -> MemoryStats;

    /// Get memory info as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Get bytes currently held by a named process
    fn owner_memory(&self, owner: &OwnerName) -> Size;

    /// Get the block layout as an ordered listing of inclusive ranges
    fn status(&self) -> Vec<RegionStatus>;

    /// Get the external fragmentation ratio
    fn external_fragmentation(&self) -> f64 {
        self.stats().external_fragmentation()
    }
}
