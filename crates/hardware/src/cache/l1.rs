//! L1 Cache.
//!
//! A 64 KiB unified, 4-way set-associative, write-back cache. Accesses are one word
//! wide; insertions move a whole line. The 48-bit address splits as:
//!
//! ```text
//!   47          14 13        6 5      3 2      0
//!  +--------------+-----------+--------+--------+
//!  |   tag (34)   |  set (8)  |  word  |  byte  |
//!  +--------------+-----------+--------+--------+
//! ```
//!
//! Victims are chosen with NRU (see [`nru`](super::nru)); reference bits age through
//! [`L1Cache::clear_reference_bits`].

use super::nru::{self, NruClass};
use super::{EntryState, Eviction, Lookup};
use crate::common::constants::{L1_NUM_SETS, L1_WAYS};
use crate::common::{Addr, CacheLine, Control, ZERO_LINE};

/// One L1 way: state bits, tag, and line data.
#[derive(Clone, Copy, Debug, Default)]
struct L1Entry {
    valid: bool,
    referenced: bool,
    dirty: bool,
    tag: u64,
    line: CacheLine,
}

impl L1Entry {
    const EMPTY: Self = Self {
        valid: false,
        referenced: false,
        dirty: false,
        tag: 0,
        line: ZERO_LINE,
    };

    const fn matches(&self, tag: u64) -> bool {
        self.valid && self.tag == tag
    }

    const fn class(&self) -> NruClass {
        NruClass::of(self.valid, self.referenced, self.dirty)
    }
}

/// Four interchangeable ways sharing one set index.
#[derive(Clone, Copy, Debug)]
struct L1Set {
    ways: [L1Entry; L1_WAYS],
}

impl L1Set {
    const EMPTY: Self = Self {
        ways: [L1Entry::EMPTY; L1_WAYS],
    };

    fn find(&self, tag: u64) -> Option<usize> {
        self.ways.iter().position(|entry| entry.matches(tag))
    }
}

/// The L1 cache: 256 sets of 4 ways.
#[derive(Clone, Debug)]
pub struct L1Cache {
    sets: Box<[L1Set]>,
}

impl Default for L1Cache {
    fn default() -> Self {
        Self::new()
    }
}

impl L1Cache {
    /// Creates an L1 cache with every way invalid.
    pub fn new() -> Self {
        Self {
            sets: vec![L1Set::EMPTY; L1_NUM_SETS].into_boxed_slice(),
        }
    }

    /// Invalidates every way of every set.
    pub fn initialize(&mut self) {
        for set in &mut self.sets {
            for entry in &mut set.ways {
                entry.valid = false;
                entry.referenced = false;
                entry.dirty = false;
            }
        }
        tracing::debug!(sets = self.sets.len(), "L1 cache invalidated");
    }

    /// Reads and/or writes one word.
    ///
    /// On a hit the way's reference bit is set; a read returns the addressed word as it
    /// was before any write, and a write stores `write_data` and marks the way dirty.
    /// A miss changes nothing.
    ///
    /// # Arguments
    ///
    /// * `address` - Address of the word; bits 48-63 are ignored.
    /// * `write_data` - Word stored when `control.write` is set.
    /// * `control` - Read/write enables.
    pub fn access(&mut self, address: u64, write_data: u64, control: Control) -> Lookup<u64> {
        let addr = Addr::new(address);
        let set = &mut self.sets[addr.l1_set()];
        let Some(way) = set.find(addr.l1_tag()) else {
            return Lookup::Miss;
        };

        let entry = &mut set.ways[way];
        let offset = addr.word_offset();
        entry.referenced = true;
        let read = control.read.then_some(entry.line[offset]);
        if control.write {
            entry.line[offset] = write_data;
            entry.dirty = true;
        }
        Lookup::Hit(read)
    }

    /// Installs the line containing `address`, evicting a way chosen by NRU.
    ///
    /// The installed way is valid, unreferenced, and clean.
    ///
    /// # Arguments
    ///
    /// * `address` - Any address in the line being installed.
    /// * `line` - The line's data.
    ///
    /// # Returns
    ///
    /// The victim's address and data when it was valid and dirty, otherwise `None`.
    pub fn insert_line(&mut self, address: u64, line: &CacheLine) -> Option<Eviction> {
        let addr = Addr::new(address);
        let set_index = addr.l1_set();
        let set = &mut self.sets[set_index];
        let way = nru::select_victim(set.ways.iter().map(L1Entry::class));
        let victim = &mut set.ways[way];

        let eviction = (victim.valid && victim.dirty).then(|| Eviction {
            address: Addr::from_l1_parts(victim.tag, set_index).val(),
            line: victim.line,
        });

        *victim = L1Entry {
            valid: true,
            referenced: false,
            dirty: false,
            tag: addr.l1_tag(),
            line: *line,
        };
        eviction
    }

    /// Clears the reference bit of every way, valid or not.
    pub fn clear_reference_bits(&mut self) {
        for set in &mut self.sets {
            for entry in &mut set.ways {
                entry.referenced = false;
            }
        }
    }

    /// Looks up the line containing `address` without touching any state bits.
    ///
    /// # Returns
    ///
    /// The matching way and its state, or `None` if the line is not resident.
    pub fn probe(&self, address: u64) -> Option<(usize, EntryState)> {
        let addr = Addr::new(address);
        let set = &self.sets[addr.l1_set()];
        set.find(addr.l1_tag()).map(|way| {
            let entry = &set.ways[way];
            (
                way,
                EntryState {
                    tag: entry.tag,
                    referenced: entry.referenced,
                    dirty: entry.dirty,
                },
            )
        })
    }

    /// Returns the number of valid ways across the cache.
    pub fn resident_lines(&self) -> usize {
        self.sets
            .iter()
            .flat_map(|set| set.ways.iter())
            .filter(|entry| entry.valid)
            .count()
    }
}
