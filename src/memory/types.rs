/*!
 * Memory Types
 * Common types for the contiguous allocation model
 */

use crate::core::types::{Address, OwnerName, Size};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
///
/// Every variant is recoverable: the operation reports failure and leaves
/// the partition unchanged. Nothing here terminates the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("No free block large enough: requested {requested} bytes, largest free {largest_free} bytes ({total_free} bytes free in total)")]
    NoSuitableBlock {
        requested: Size,
        largest_free: Size,
        total_free: Size,
    },

    #[error("Process {0} not found")]
    ProcessNotFound(OwnerName),

    #[error("Invalid allocation size: size must be greater than zero")]
    InvalidSize,
}

/// Placement strategy for selecting a free block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementPolicy {
    /// First free block in address order that fits
    FirstFit,
    /// Fitting free block with the smallest leftover
    BestFit,
    /// Fitting free block with the largest leftover
    WorstFit,
}

impl PlacementPolicy {
    /// Single-letter form used by the command shell
    pub const fn as_char(self) -> char {
        match self {
            PlacementPolicy::FirstFit => 'F',
            PlacementPolicy::BestFit => 'B',
            PlacementPolicy::WorstFit => 'W',
        }
    }
}

impl TryFrom<char> for PlacementPolicy {
    type Error = char;

    fn try_from(c: char) -> Result<Self, char> {
        match c {
            'F' => Ok(PlacementPolicy::FirstFit),
            'B' => Ok(PlacementPolicy::BestFit),
            'W' => Ok(PlacementPolicy::WorstFit),
            other => Err(other),
        }
    }
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementPolicy::FirstFit => write!(f, "first-fit"),
            PlacementPolicy::BestFit => write!(f, "best-fit"),
            PlacementPolicy::WorstFit => write!(f, "worst-fit"),
        }
    }
}

/// Allocation state of a block
///
/// The owner lives inside the `Allocated` variant: a free block cannot
/// carry a name and an allocated block cannot lack one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockState {
    Free,
    Allocated(OwnerName),
}

/// A contiguous address range of the pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryBlock {
    pub start: Address,
    pub len: Size,
    pub state: BlockState,
}

impl MemoryBlock {
    pub fn free(start: Address, len: Size) -> Self {
        Self {
            start,
            len,
            state: BlockState::Free,
        }
    }

    pub fn allocated(start: Address, len: Size, owner: OwnerName) -> Self {
        Self {
            start,
            len,
            state: BlockState::Allocated(owner),
        }
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.state, BlockState::Free)
    }

    #[inline]
    pub fn owner(&self) -> Option<&OwnerName> {
        match &self.state {
            BlockState::Free => None,
            BlockState::Allocated(owner) => Some(owner),
        }
    }

    /// Last address covered by this block (blocks are never empty)
    #[inline]
    pub fn end_inclusive(&self) -> Address {
        self.start + self.len - 1
    }
}

/// One entry of a status listing: an inclusive address range and its holder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStatus {
    pub start: Address,
    pub end: Address,
    pub owner: Option<OwnerName>,
}

/// Memory statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_memory: Size,
    pub used_memory: Size,
    pub available_memory: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_block: Size,
}

impl MemoryStats {
    /// External fragmentation ratio: `1 - largest_free / total_free`
    ///
    /// 0.0 when all free space is one contiguous block (or none remains),
    /// approaching 1.0 as free space scatters into small holes.
    pub fn external_fragmentation(&self) -> f64 {
        if self.available_memory == 0 {
            return 0.0;
        }
        let largest = self.largest_free_block.min(self.available_memory) as f64;
        let ratio = 1.0 - largest / self.available_memory as f64;
        ratio.clamp(0.0, 1.0)
    }
}
