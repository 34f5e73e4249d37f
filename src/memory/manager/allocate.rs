/*!
 * Allocation
 * Placement selection, block splitting, and owner tagging
 */

use super::super::placement;
use super::super::types::{MemoryError, MemoryResult, PlacementPolicy};
use super::MemoryManager;
use crate::core::limits::MIN_REMAINDER_BYTES;
use crate::core::types::{Address, OwnerName, Size};
use log::{error, info};

impl MemoryManager {
    /// Allocate `size` bytes for `owner` using the given placement policy
    ///
    /// The candidate block is split when the leftover exceeds
    /// [`MIN_REMAINDER_BYTES`]; otherwise the whole block is handed out and
    /// the slack stays inside it as internal fragmentation.
    pub fn allocate(
        &mut self,
        owner: OwnerName,
        size: Size,
        policy: PlacementPolicy,
    ) -> MemoryResult<Address> {
        if size == 0 {
            return Err(MemoryError::InvalidSize);
        }
        debug_assert!(!owner.is_empty(), "allocation with empty owner name");

        let idx = match placement::find_fit(self.partition.blocks(), size, policy) {
            Some(idx) => idx,
            None => {
                let largest_free = self.partition.largest_free();
                let total_free = self.partition.total_free();
                error!(
                    "No fit for process {}: requested {} bytes, largest free block {} bytes ({} strategy)",
                    owner, size, largest_free, policy
                );
                return Err(MemoryError::NoSuitableBlock {
                    requested: size,
                    largest_free,
                    total_free,
                });
            }
        };

        let candidate = &self.partition.blocks()[idx];
        let address = candidate.start;
        let candidate_len = candidate.len;

        if candidate_len > size + MIN_REMAINDER_BYTES {
            self.partition.split_free_block(idx, size);
            info!(
                "Split block at {}: keeping {} bytes, {} bytes stay free at {}",
                address,
                size,
                candidate_len - size,
                address + size
            );
        }

        let granted = self.partition.blocks()[idx].len;
        info!(
            "Allocated {} bytes at {} for process {} ({} strategy, {} bytes requested)",
            granted, address, owner, policy, size
        );
        self.partition.assign(idx, owner);

        self.partition.debug_validate();
        Ok(address)
    }
}
