/*!
 * Release
 * Frees all blocks of a named process and merges adjacent free blocks
 */

use super::super::types::{MemoryError, MemoryResult};
use super::MemoryManager;
use crate::core::types::{OwnerName, Size};
use log::{info, warn};

impl MemoryManager {
    /// Release every block held by `owner`, returning the bytes freed
    ///
    /// The coalescing pass that follows is global: it also merges free
    /// pairs left over from earlier operations, not just the ones this
    /// release created.
    pub fn release(&mut self, owner: &OwnerName) -> MemoryResult<Size> {
        let (freed, count) = self.partition.release_owner(owner);
        if count == 0 {
            warn!("Attempted to release memory for unknown process {}", owner);
            return Err(MemoryError::ProcessNotFound(owner.clone()));
        }

        let merged = self.partition.coalesce();
        if merged > 0 {
            info!("Coalesced {} pairs of adjacent free blocks", merged);
        }
        info!(
            "Released {} bytes across {} blocks for process {}",
            freed, count, owner
        );

        self.partition.debug_validate();
        Ok(freed)
    }
}
