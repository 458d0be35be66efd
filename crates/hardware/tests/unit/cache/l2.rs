//! L2 Cache Unit Tests.
//!
//! Verifies direct-mapped lookup, whole-line reads and writes, dirty tracking, and the
//! unconditional replacement performed by `insert_line`.

use cachesim_core::cache::{L2Cache, Lookup, writeback_status_bits};
use cachesim_core::common::{Control, ZERO_LINE};
use pretty_assertions::assert_eq;

use crate::common::{l2_addr, line_from};

// ══════════════════════════════════════════════════════════
// 1. Lookup
// ══════════════════════════════════════════════════════════

#[test]
fn empty_cache_misses() {
    let mut l2 = L2Cache::new();
    let lookup = l2.access(0x1000, &ZERO_LINE, Control::READ);
    assert_eq!(lookup, Lookup::Miss);
    assert_eq!(lookup.status_bits(), 0);
    assert_eq!(l2.resident_lines(), 0);
}

#[test]
fn inserted_line_reads_back_whole() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(5, 0x123, 0);
    assert_eq!(l2.insert_line(addr, &line_from(100)), None);

    let lookup = l2.access(addr + 0x28, &ZERO_LINE, Control::READ);
    assert_eq!(lookup.status_bits(), 1);
    assert_eq!(lookup.into_data(), Some(line_from(100)));
}

#[test]
fn tag_mismatch_at_same_index_misses() {
    let mut l2 = L2Cache::new();
    let _ = l2.insert_line(l2_addr(1, 7, 0), &line_from(0));
    assert!(!l2.access(l2_addr(2, 7, 0), &ZERO_LINE, Control::READ).is_hit());
    assert!(l2.access(l2_addr(1, 7, 0), &ZERO_LINE, Control::READ).is_hit());
}

#[test]
fn miss_changes_nothing() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(1, 7, 0);
    let _ = l2.insert_line(addr, &line_from(0));
    let _ = l2.access(l2_addr(9, 7, 0), &line_from(50), Control::WRITE);
    let state = l2.probe(addr).unwrap();
    assert!(!state.dirty);
    assert_eq!(
        l2.access(addr, &ZERO_LINE, Control::READ).into_data(),
        Some(line_from(0))
    );
}

#[test]
fn high_address_bits_are_ignored() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(3, 0x44, 0);
    let _ = l2.insert_line(addr | (0xBEEF << 48), &line_from(9));
    assert!(l2.access(addr, &ZERO_LINE, Control::READ).is_hit());
}

// ══════════════════════════════════════════════════════════
// 2. Writes
// ══════════════════════════════════════════════════════════

#[test]
fn write_replaces_line_and_sets_dirty() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(4, 0x10, 0);
    let _ = l2.insert_line(addr, &line_from(0));

    assert_eq!(
        l2.access(addr, &line_from(700), Control::WRITE),
        Lookup::Hit(None)
    );
    assert!(l2.probe(addr).unwrap().dirty);
    assert_eq!(
        l2.access(addr, &ZERO_LINE, Control::READ).into_data(),
        Some(line_from(700))
    );
}

#[test]
fn read_write_returns_previous_line() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(4, 0x10, 0);
    let _ = l2.insert_line(addr, &line_from(1));

    let old = l2.access(addr, &line_from(2), Control::READ_WRITE).into_data();
    assert_eq!(old, Some(line_from(1)));
    assert_eq!(
        l2.access(addr, &ZERO_LINE, Control::READ).into_data(),
        Some(line_from(2))
    );
}

// ══════════════════════════════════════════════════════════
// 3. Replacement
// ══════════════════════════════════════════════════════════

#[test]
fn replacing_clean_entry_needs_no_writeback() {
    let mut l2 = L2Cache::new();
    let _ = l2.insert_line(l2_addr(1, 0x300, 0), &line_from(0));
    let eviction = l2.insert_line(l2_addr(2, 0x300, 0), &line_from(8));
    assert_eq!(eviction, None);
    assert_eq!(writeback_status_bits(eviction.as_ref()), 0);
}

#[test]
fn replacing_dirty_entry_reports_its_address_and_data() {
    let mut l2 = L2Cache::new();
    let old = l2_addr(0x5FF_FFFF, 0x7FFF, 0);
    let _ = l2.insert_line(old, &line_from(0));
    let _ = l2.access(old, &line_from(900), Control::WRITE);

    let eviction = l2.insert_line(l2_addr(1, 0x7FFF, 2), &line_from(8)).unwrap();
    assert_eq!(writeback_status_bits(Some(&eviction)), 1);
    assert_eq!(eviction.address, old);
    assert_eq!(eviction.line, line_from(900));
}

#[test]
fn new_entry_is_clean_even_after_dirty_eviction() {
    let mut l2 = L2Cache::new();
    let _ = l2.insert_line(l2_addr(1, 3, 0), &line_from(0));
    let _ = l2.access(l2_addr(1, 3, 0), &line_from(1), Control::WRITE);
    let _ = l2.insert_line(l2_addr(2, 3, 0), &line_from(2));

    let state = l2.probe(l2_addr(2, 3, 0)).unwrap();
    assert_eq!(state.tag, 2);
    assert!(!state.dirty);
    assert!(l2.probe(l2_addr(1, 3, 0)).is_none());
}

#[test]
fn reinserting_same_line_overwrites_in_place() {
    let mut l2 = L2Cache::new();
    let addr = l2_addr(6, 6, 0);
    let _ = l2.insert_line(addr, &line_from(0));
    let _ = l2.access(addr, &line_from(5), Control::WRITE);

    let eviction = l2.insert_line(addr, &line_from(10)).unwrap();
    assert_eq!(eviction.address, addr);
    assert_eq!(l2.resident_lines(), 1);
}

#[test]
fn initialize_invalidates_everything() {
    let mut l2 = L2Cache::new();
    for index in 0..16 {
        let _ = l2.insert_line(l2_addr(1, index, 0), &line_from(index));
    }
    assert_eq!(l2.resident_lines(), 16);
    l2.initialize();
    assert_eq!(l2.resident_lines(), 0);
    assert!(!l2.access(l2_addr(1, 0, 0), &ZERO_LINE, Control::READ).is_hit());
}
