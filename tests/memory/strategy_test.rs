/*!
 * Placement Strategy Tests
 * First/best/worst fit against a fragmented layout, through the manager
 */

use contig_sim::memory::{MemoryManager, PlacementPolicy};
use contig_sim::OwnerName;
use pretty_assertions::assert_eq;

fn owner(name: &str) -> OwnerName {
    OwnerName::new(name)
}

/// Free holes of 50, 20, and 80 bytes at addresses 0, 60, and 90
fn fragmented_manager() -> MemoryManager {
    let mut manager = MemoryManager::with_capacity(170);
    manager
        .allocate(owner("hole1"), 50, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("keep1"), 10, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("hole2"), 20, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("keep2"), 10, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("hole1")).unwrap();
    manager.release(&owner("hole2")).unwrap();

    let stats = manager.stats();
    assert_eq!(stats.free_blocks, 3);
    assert_eq!(stats.available_memory, 150);
    manager
}

/// Two identical 30-byte holes at addresses 0 and 40
fn two_equal_holes() -> MemoryManager {
    let mut manager = MemoryManager::with_capacity(110);
    manager
        .allocate(owner("a"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("keep"), 10, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("b"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("tail"), 40, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("a")).unwrap();
    manager.release(&owner("b")).unwrap();
    manager
}

#[test]
fn test_first_fit_takes_first_hole() {
    let mut manager = fragmented_manager();
    let addr = manager
        .allocate(owner("new"), 15, PlacementPolicy::FirstFit)
        .unwrap();
    assert_eq!(addr, 0);
}

#[test]
fn test_best_fit_takes_tightest_hole() {
    let mut manager = fragmented_manager();
    let addr = manager
        .allocate(owner("new"), 15, PlacementPolicy::BestFit)
        .unwrap();
    assert_eq!(addr, 60);
}

#[test]
fn test_worst_fit_takes_largest_hole() {
    let mut manager = fragmented_manager();
    let addr = manager
        .allocate(owner("new"), 15, PlacementPolicy::WorstFit)
        .unwrap();
    assert_eq!(addr, 90);
}

#[test]
fn test_best_fit_prefers_exact_hole() {
    let mut manager = fragmented_manager();
    // The 20-byte hole at 60 is an exact fit and beats the earlier 50-byte one
    let addr = manager
        .allocate(owner("new"), 20, PlacementPolicy::BestFit)
        .unwrap();
    assert_eq!(addr, 60);

    // Exact fit leaves no remainder block behind
    assert_eq!(manager.stats().free_blocks, 2);
}

#[test]
fn test_best_fit_near_fit_absorbs_remainder() {
    let mut manager = fragmented_manager();
    // 15 into the 20-byte hole leaves 5 bytes, below the split threshold:
    // the whole hole is granted
    manager
        .allocate(owner("new"), 15, PlacementPolicy::BestFit)
        .unwrap();
    assert_eq!(manager.owner_memory(&owner("new")), 20);
}

#[test]
fn test_best_fit_tie_breaks_to_lowest_address() {
    let mut manager = two_equal_holes();
    let addr = manager
        .allocate(owner("new"), 10, PlacementPolicy::BestFit)
        .unwrap();
    assert_eq!(addr, 0);
}

#[test]
fn test_worst_fit_tie_breaks_to_lowest_address() {
    let mut manager = two_equal_holes();
    let addr = manager
        .allocate(owner("new"), 10, PlacementPolicy::WorstFit)
        .unwrap();
    assert_eq!(addr, 0);
}

#[test]
fn test_strategies_agree_when_one_hole_remains() {
    for policy in [
        PlacementPolicy::FirstFit,
        PlacementPolicy::BestFit,
        PlacementPolicy::WorstFit,
    ] {
        let mut manager = MemoryManager::with_capacity(100);
        manager.allocate(owner("head"), 40, policy).unwrap();
        let addr = manager.allocate(owner("next"), 10, policy).unwrap();
        assert_eq!(addr, 40);
    }
}
