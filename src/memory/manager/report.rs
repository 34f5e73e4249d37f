/*!
 * Status Reporting
 * Ordered range listing and aggregate statistics
 */

use super::super::types::{MemoryStats, RegionStatus};
use super::MemoryManager;
use crate::core::types::{OwnerName, Size};
use log::error;

impl MemoryManager {
    /// Ordered listing of contiguous ranges, covering the whole pool
    ///
    /// A gap between blocks cannot occur while the partition invariant
    /// holds; if one is ever observed it is flagged as a violation and
    /// rendered as an extra unused range so the caller still sees a
    /// complete picture.
    pub fn status(&self) -> Vec<RegionStatus> {
        let capacity = self.partition.capacity();
        let mut regions = Vec::with_capacity(self.partition.len());
        let mut cursor = 0;

        for block in self.partition.blocks() {
            if block.start > cursor {
                error!(
                    "Layout gap at [{}:{}] - partition invariant violated",
                    cursor,
                    block.start - 1
                );
                debug_assert!(false, "partition gap before address {}", block.start);
                regions.push(RegionStatus {
                    start: cursor,
                    end: block.start - 1,
                    owner: None,
                });
            }
            regions.push(RegionStatus {
                start: block.start,
                end: block.end_inclusive(),
                owner: block.owner().cloned(),
            });
            cursor = block.start + block.len;
        }

        if cursor < capacity {
            error!(
                "Layout gap at [{}:{}] - partition invariant violated",
                cursor,
                capacity - 1
            );
            debug_assert!(false, "partition ends short of capacity");
            regions.push(RegionStatus {
                start: cursor,
                end: capacity - 1,
                owner: None,
            });
        }

        regions
    }

    /// Aggregate statistics over the current layout
    pub fn stats(&self) -> MemoryStats {
        let total_memory = self.partition.capacity();
        let used_memory = self.partition.used_bytes();
        let available_memory = total_memory - used_memory;
        let usage_percentage = if total_memory == 0 {
            0.0
        } else {
            used_memory as f64 / total_memory as f64 * 100.0
        };

        let mut allocated_blocks = 0;
        let mut free_blocks = 0;
        for block in self.partition.blocks() {
            if block.is_free() {
                free_blocks += 1;
            } else {
                allocated_blocks += 1;
            }
        }

        MemoryStats {
            total_memory,
            used_memory,
            available_memory,
            usage_percentage,
            allocated_blocks,
            free_blocks,
            largest_free_block: self.partition.largest_free(),
        }
    }

    /// Memory info as (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let total = self.partition.capacity();
        let used = self.partition.used_bytes();
        (total, used, total - used)
    }

    /// Bytes currently held by a named process
    pub fn owner_memory(&self, owner: &OwnerName) -> Size {
        self.partition.owner_bytes(owner)
    }
}
