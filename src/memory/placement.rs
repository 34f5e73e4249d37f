/*!
 * Placement Strategies
 *
 * Pure searches over the block sequence. Each returns the index of a free
 * block that can hold the request, or `None` when no block qualifies. An
 * exact fit (`len == requested`) qualifies for all three.
 */

use super::types::{MemoryBlock, PlacementPolicy};
use crate::core::types::Size;

/// Select a free block index for `size` bytes under the given policy
pub fn find_fit(blocks: &[MemoryBlock], size: Size, policy: PlacementPolicy) -> Option<usize> {
    match policy {
        PlacementPolicy::FirstFit => first_fit(blocks, size),
        PlacementPolicy::BestFit => best_fit(blocks, size),
        PlacementPolicy::WorstFit => worst_fit(blocks, size),
    }
}

/// First free block in address order with `len >= size`
pub fn first_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    blocks
        .iter()
        .position(|b| b.is_free() && b.len >= size)
}

/// Qualifying free block minimizing the leftover
///
/// Strict `<` comparison, so among equal leftovers the lowest address wins.
pub fn best_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    let mut best: Option<(usize, Size)> = None;
    for (idx, block) in blocks.iter().enumerate() {
        if !block.is_free() || block.len < size {
            continue;
        }
        let leftover = block.len - size;
        if best.map_or(true, |(_, smallest)| leftover < smallest) {
            best = Some((idx, leftover));
        }
    }
    best.map(|(idx, _)| idx)
}

/// Qualifying free block maximizing the leftover
///
/// Strict `>` comparison, so among equal leftovers the lowest address wins.
pub fn worst_fit(blocks: &[MemoryBlock], size: Size) -> Option<usize> {
    let mut worst: Option<(usize, Size)> = None;
    for (idx, block) in blocks.iter().enumerate() {
        if !block.is_free() || block.len < size {
            continue;
        }
        let leftover = block.len - size;
        if worst.map_or(true, |(_, largest)| leftover > largest) {
            worst = Some((idx, leftover));
        }
    }
    worst.map(|(idx, _)| idx)
}
