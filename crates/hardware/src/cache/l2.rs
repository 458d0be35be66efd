//! L2 Cache.
//!
//! A 2 MiB direct-mapped, write-back cache. Every access moves a whole line. The
//! 48-bit address splits as:
//!
//! ```text
//!   47          21 20          6 5        0
//!  +--------------+-------------+----------+
//!  |   tag (27)   |  index (15) |  offset  |
//!  +--------------+-------------+----------+
//! ```
//!
//! With one entry per index there is nothing to choose between on insertion: the
//! resident entry is always the victim, so no recency bits are kept.

use super::{EntryState, Eviction, Lookup};
use crate::common::constants::L2_NUM_ENTRIES;
use crate::common::{Addr, CacheLine, Control, ZERO_LINE};

#[derive(Clone, Copy, Debug)]
struct L2Entry {
    valid: bool,
    dirty: bool,
    tag: u64,
    line: CacheLine,
}

impl L2Entry {
    const EMPTY: Self = Self {
        valid: false,
        dirty: false,
        tag: 0,
        line: ZERO_LINE,
    };
}

/// The L2 cache: 32768 direct-mapped entries.
#[derive(Clone, Debug)]
pub struct L2Cache {
    entries: Box<[L2Entry]>,
}

impl Default for L2Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl L2Cache {
    /// Creates an L2 cache with every entry invalid.
    pub fn new() -> Self {
        Self {
            entries: vec![L2Entry::EMPTY; L2_NUM_ENTRIES].into_boxed_slice(),
        }
    }

    /// Invalidates every entry.
    pub fn initialize(&mut self) {
        for entry in &mut self.entries {
            entry.valid = false;
            entry.dirty = false;
        }
        tracing::debug!(entries = self.entries.len(), "L2 cache invalidated");
    }

    /// Reads and/or writes the whole line containing `address`.
    ///
    /// A hit requires the indexed entry to be valid with a matching tag. A read returns
    /// the line as it was before any write; a write replaces the line and marks it dirty.
    /// A miss changes nothing.
    ///
    /// # Arguments
    ///
    /// * `address` - Any address in the line; bits 48-63 are ignored.
    /// * `write_data` - Line stored when `control.write` is set.
    /// * `control` - Read/write enables.
    pub fn access(
        &mut self,
        address: u64,
        write_data: &CacheLine,
        control: Control,
    ) -> Lookup<CacheLine> {
        let addr = Addr::new(address);
        let entry = &mut self.entries[addr.l2_index()];
        if !entry.valid || entry.tag != addr.l2_tag() {
            return Lookup::Miss;
        }

        let read = control.read.then_some(entry.line);
        if control.write {
            entry.line = *write_data;
            entry.dirty = true;
        }
        Lookup::Hit(read)
    }

    /// Installs the line containing `address`, replacing whatever occupied its index.
    ///
    /// The installed entry is valid and clean.
    ///
    /// # Returns
    ///
    /// The previous occupant's address and data when it was valid and dirty.
    pub fn insert_line(&mut self, address: u64, line: &CacheLine) -> Option<Eviction> {
        let addr = Addr::new(address);
        let index = addr.l2_index();
        let entry = &mut self.entries[index];

        let eviction = (entry.valid && entry.dirty).then(|| Eviction {
            address: Addr::from_l2_parts(entry.tag, index).val(),
            line: entry.line,
        });

        *entry = L2Entry {
            valid: true,
            dirty: false,
            tag: addr.l2_tag(),
            line: *line,
        };
        eviction
    }

    /// Looks up the line containing `address` without side effects.
    pub fn probe(&self, address: u64) -> Option<EntryState> {
        let addr = Addr::new(address);
        let entry = &self.entries[addr.l2_index()];
        (entry.valid && entry.tag == addr.l2_tag()).then_some(EntryState {
            tag: entry.tag,
            referenced: false,
            dirty: entry.dirty,
        })
    }

    /// Returns the number of valid entries.
    pub fn resident_lines(&self) -> usize {
        self.entries.iter().filter(|entry| entry.valid).count()
    }
}
