/*!
 * Compaction Tests
 * Packing, relative order, trailing free block, idempotence
 */

use contig_sim::memory::{MemoryManager, PlacementPolicy, RegionStatus};
use contig_sim::OwnerName;
use pretty_assertions::assert_eq;

fn owner(name: &str) -> OwnerName {
    OwnerName::new(name)
}

fn unused(start: usize, end: usize) -> RegionStatus {
    RegionStatus {
        start,
        end,
        owner: None,
    }
}

fn held(start: usize, end: usize, name: &str) -> RegionStatus {
    RegionStatus {
        start,
        end,
        owner: Some(owner(name)),
    }
}

/// Allocated (owner, length) pairs in address order
fn allocated_layout(manager: &MemoryManager) -> Vec<(String, usize)> {
    manager
        .status()
        .into_iter()
        .filter_map(|r| r.owner.map(|o| (o.as_str().to_string(), r.end - r.start + 1)))
        .collect()
}

#[test]
fn test_compaction_packs_blocks_preserving_order() {
    let mut manager = MemoryManager::with_capacity(200);
    manager
        .allocate(owner("A"), 50, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("B"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("C"), 20, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("B")).unwrap();

    let reclaimed = manager.compact();
    assert_eq!(reclaimed, 130);
    assert_eq!(
        manager.status(),
        vec![held(0, 49, "A"), held(50, 69, "C"), unused(70, 199)]
    );
}

#[test]
fn test_compaction_keeps_allocation_multiset() {
    let mut manager = MemoryManager::with_capacity(300);
    for (name, size) in [("A", 40), ("B", 25), ("C", 60), ("D", 25)] {
        manager
            .allocate(owner(name), size, PlacementPolicy::FirstFit)
            .unwrap();
    }
    manager.release(&owner("A")).unwrap();
    manager.release(&owner("C")).unwrap();
    manager
        .allocate(owner("E"), 20, PlacementPolicy::BestFit)
        .unwrap();

    let before = allocated_layout(&manager);
    let (_, used_before, _) = manager.info();
    manager.compact();

    assert_eq!(allocated_layout(&manager), before);
    let (total, used_after, _) = manager.info();
    assert_eq!(used_after, used_before);

    // All free space sits in one trailing block
    let stats = manager.stats();
    assert_eq!(stats.free_blocks, 1);
    assert_eq!(stats.largest_free_block, total - used_after);
    assert_eq!(stats.external_fragmentation(), 0.0);
}

#[test]
fn test_compaction_is_idempotent() {
    let mut manager = MemoryManager::with_capacity(200);
    manager
        .allocate(owner("A"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("B"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("A")).unwrap();

    manager.compact();
    let once = manager.status();
    manager.compact();
    assert_eq!(manager.status(), once);
}

#[test]
fn test_compaction_of_untouched_pool_is_a_no_op() {
    let mut manager = MemoryManager::with_capacity(100);
    let reclaimed = manager.compact();
    assert_eq!(reclaimed, 100);
    assert_eq!(manager.status(), vec![unused(0, 99)]);
}

#[test]
fn test_compaction_after_releasing_everything() {
    let mut manager = MemoryManager::with_capacity(100);
    manager
        .allocate(owner("A"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("B"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("A")).unwrap();
    manager.release(&owner("B")).unwrap();

    let reclaimed = manager.compact();
    assert_eq!(reclaimed, 100);
    assert_eq!(manager.status(), vec![unused(0, 99)]);
}

#[test]
fn test_compaction_of_full_pool_has_no_free_tail() {
    let mut manager = MemoryManager::with_capacity(100);
    manager
        .allocate(owner("A"), 50, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("B"), 50, PlacementPolicy::FirstFit)
        .unwrap();

    let reclaimed = manager.compact();
    assert_eq!(reclaimed, 0);
    assert_eq!(manager.status(), vec![held(0, 49, "A"), held(50, 99, "B")]);
}

#[test]
fn test_compaction_moves_block_contents() {
    let mut manager = MemoryManager::with_capacity(100);
    manager
        .allocate(owner("A"), 20, PlacementPolicy::FirstFit)
        .unwrap();
    let addr = manager
        .allocate(owner("B"), 20, PlacementPolicy::FirstFit)
        .unwrap();
    manager.pool_mut().fill(addr, 20, 0xB2);

    manager.release(&owner("A")).unwrap();
    manager.compact();

    // B slides to the front of the pool with its bytes intact
    assert_eq!(manager.status()[0], held(0, 19, "B"));
    assert_eq!(manager.pool().slice(0, 20), &[0xB2; 20][..]);
}

#[test]
fn test_compaction_enables_large_allocation() {
    // Classic external fragmentation: enough free bytes in total, but no
    // single hole large enough until compaction merges them
    let mut manager = MemoryManager::with_capacity(100);
    manager
        .allocate(owner("A"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("B"), 30, PlacementPolicy::FirstFit)
        .unwrap();
    manager
        .allocate(owner("C"), 40, PlacementPolicy::FirstFit)
        .unwrap();
    manager.release(&owner("A")).unwrap();
    manager.release(&owner("C")).unwrap();

    assert!(manager
        .allocate(owner("big"), 50, PlacementPolicy::FirstFit)
        .is_err());

    manager.compact();
    let addr = manager
        .allocate(owner("big"), 50, PlacementPolicy::FirstFit)
        .unwrap();
    assert_eq!(addr, 30);
    assert_eq!(
        manager.status(),
        vec![held(0, 29, "B"), held(30, 79, "big"), unused(80, 99)]
    );
}
