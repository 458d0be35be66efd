//! Write-Back Cache Levels.
//!
//! This module implements the two cache levels between the CPU and main memory:
//! 1. **L1:** 256 sets × 4 ways, word-granular access, NRU replacement.
//! 2. **L2:** 32768 direct-mapped entries, line-granular access.
//!
//! Both levels are write-back: a write only marks the resident line dirty, and the
//! data travels to the next level when the line is evicted. Neither level allocates
//! on a miss; the caller brings the line in with an explicit `insert_line`.

/// L1 set-associative cache.
pub mod l1;

/// L2 direct-mapped cache.
pub mod l2;

/// Not-recently-used victim selection.
pub mod nru;

pub use l1::L1Cache;
pub use l2::L2Cache;

use crate::common::CacheLine;

/// Outcome of a cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The line was resident. Carries the read data if a read was requested.
    Hit(Option<T>),
    /// The line was not resident; no state changed.
    Miss,
}

impl<T> Lookup<T> {
    /// Returns `true` on a hit.
    pub const fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Returns the read data, if the lookup hit and a read was requested.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Hit(data) => data,
            Self::Miss => None,
        }
    }

    /// Returns the status byte: bit 0 set on a hit.
    pub const fn status_bits(&self) -> u8 {
        if self.is_hit() { 1 } else { 0 }
    }
}

/// A dirty line pushed out of a cache that must be written to the next level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Eviction {
    /// Line-aligned address rebuilt from the victim's tag and set/index.
    pub address: u64,
    /// The victim's data at the time of eviction.
    pub line: CacheLine,
}

/// Returns the status byte for an insertion: bit 0 set when a write-back is required.
pub const fn writeback_status_bits(eviction: Option<&Eviction>) -> u8 {
    if eviction.is_some() { 1 } else { 0 }
}

/// Snapshot of an entry's state bits, for inspection without side effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EntryState {
    /// Tag stored in the entry.
    pub tag: u64,
    /// Reference (recently used) bit; always `false` for L2.
    pub referenced: bool,
    /// Dirty bit.
    pub dirty: bool,
}
