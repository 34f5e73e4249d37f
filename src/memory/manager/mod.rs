/*!
 * Memory Manager
 *
 * Owned context object tying the byte pool to the block partition.
 *
 * ## Operations
 *
 * - **Allocation**: placement search (first/best/worst fit), block
 *   splitting when the leftover is worth tracking, owner tagging
 * - **Release**: frees every block of a named process, then merges
 *   adjacent free blocks
 * - **Compaction**: packs allocated blocks to the front of the pool,
 *   physically relocating their bytes, and folds all free space into a
 *   single trailing block
 * - **Status**: ordered listing of contiguous ranges and their holders
 *
 * All operations are synchronous and run to completion; the manager has
 * exactly one logical owner at a time, so no locking is involved. Each
 * mutating operation either completes its invariant-preserving transition
 * in full or leaves the partition untouched.
 */

mod allocate;
mod compact;
mod release;
mod report;

use super::partition::BlockPartition;
use super::pool::MemoryPool;
use super::traits::{Allocator, Compaction, MemoryInfo, ProcessMemoryCleanup};
use super::types::{MemoryResult, MemoryStats, PlacementPolicy, RegionStatus};
use crate::core::limits::DEFAULT_POOL_BYTES;
use crate::core::types::{Address, OwnerName, Size};
use log::info;

/// Memory manager over one pool and its partition
#[derive(Debug)]
pub struct MemoryManager {
    pool: MemoryPool,
    partition: BlockPartition,
}

impl MemoryManager {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_BYTES)
    }

    /// Create a manager over a pool of the given capacity
    pub fn with_capacity(total: Size) -> Self {
        info!("Memory manager initialized with a {} byte pool", total);
        Self {
            pool: MemoryPool::with_capacity(total),
            partition: BlockPartition::new(total),
        }
    }

    #[inline]
    pub fn capacity(&self) -> Size {
        self.partition.capacity()
    }

    /// Read-only view of the backing pool
    pub fn pool(&self) -> &MemoryPool {
        &self.pool
    }

    /// Mutable view of the backing pool, for simulated process writes
    pub fn pool_mut(&mut self) -> &mut MemoryPool {
        &mut self.pool
    }

    /// Read-only view of the block partition
    pub fn partition(&self) -> &BlockPartition {
        &self.partition
    }
}

impl Default for MemoryManager {
    fn default() -> Self {
        Self::new()
    }
}

// Trait interfaces delegate to the inherent implementations
impl Allocator for MemoryManager {
    fn allocate(
        &mut self,
        owner: OwnerName,
        size: Size,
        policy: PlacementPolicy,
    ) -> MemoryResult<Address> {
        MemoryManager::allocate(self, owner, size, policy)
    }
}

impl ProcessMemoryCleanup for MemoryManager {
    fn release(&mut self, owner: &OwnerName) -> MemoryResult<Size> {
        MemoryManager::release(self, owner)
    }
}

impl Compaction for MemoryManager {
    fn compact(&mut self) -> Size {
        MemoryManager::compact(self)
    }
}

impl MemoryInfo for MemoryManager {
    fn stats(&self) -> MemoryStats {
        MemoryManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        MemoryManager::info(self)
    }

    fn owner_memory(&self, owner: &OwnerName) -> Size {
        MemoryManager::owner_memory(self, owner)
    }

    fn status(&self) -> Vec<RegionStatus> {
        MemoryManager::status(self)
    }
}
