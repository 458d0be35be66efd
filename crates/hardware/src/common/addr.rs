//! Simulated address type.
//!
//! This module defines a strong type for addresses presented to the hierarchy. It provides:
//! 1. **Masking:** Bits 48-63 are dropped on construction, so two raw values that differ
//!    only above bit 47 produce the same `Addr`.
//! 2. **Field Extraction:** Word offset, L1 set/tag, and L2 index/tag decomposition.
//! 3. **Reconstruction:** Rebuilding a line-aligned address from a stored tag and its
//!    set or index, used when writing back an evicted line.

use super::constants::{
    ADDRESS_MASK, INDEX_SHIFT, L1_NUM_SETS, L1_TAG_MASK, L1_TAG_SHIFT, L2_NUM_ENTRIES,
    L2_TAG_MASK, L2_TAG_SHIFT, LINE_OFFSET_MASK, WORD_OFFSET_MASK, WORD_OFFSET_SHIFT,
};

/// A 48-bit simulated address.
///
/// The wrapped value never has bits set above bit 47.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Addr(u64);

impl Addr {
    /// Creates an address from a raw 64-bit value, discarding bits 48-63.
    ///
    /// # Arguments
    ///
    /// * `raw` - The raw address as issued by the CPU.
    #[inline(always)]
    pub const fn new(raw: u64) -> Self {
        Self(raw & ADDRESS_MASK)
    }

    /// Returns the masked 48-bit value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Returns the address of the first byte of the containing cache line.
    #[inline(always)]
    pub const fn line_base(self) -> Self {
        Self(self.0 & !LINE_OFFSET_MASK)
    }

    /// Returns the word offset within the line (bits 3-5).
    #[inline(always)]
    pub const fn word_offset(self) -> usize {
        ((self.0 >> WORD_OFFSET_SHIFT) & WORD_OFFSET_MASK) as usize
    }

    /// Returns the L1 set index (bits 6-13).
    #[inline(always)]
    pub const fn l1_set(self) -> usize {
        ((self.0 >> INDEX_SHIFT) as usize) & (L1_NUM_SETS - 1)
    }

    /// Returns the L1 tag (bits 14-47).
    #[inline(always)]
    pub const fn l1_tag(self) -> u64 {
        (self.0 >> L1_TAG_SHIFT) & L1_TAG_MASK
    }

    /// Returns the L2 index (bits 6-20).
    #[inline(always)]
    pub const fn l2_index(self) -> usize {
        ((self.0 >> INDEX_SHIFT) as usize) & (L2_NUM_ENTRIES - 1)
    }

    /// Returns the L2 tag (bits 21-47).
    #[inline(always)]
    pub const fn l2_tag(self) -> u64 {
        (self.0 >> L2_TAG_SHIFT) & L2_TAG_MASK
    }

    /// Rebuilds the line address held by an L1 entry.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag stored in the entry.
    /// * `set` - The set the entry lives in.
    pub const fn from_l1_parts(tag: u64, set: usize) -> Self {
        Self::new(((tag & L1_TAG_MASK) << L1_TAG_SHIFT) | ((set as u64) << INDEX_SHIFT))
    }

    /// Rebuilds the line address held by an L2 entry.
    ///
    /// # Arguments
    ///
    /// * `tag` - The tag stored in the entry.
    /// * `index` - The entry's index.
    pub const fn from_l2_parts(tag: u64, index: usize) -> Self {
        Self::new(((tag & L2_TAG_MASK) << L2_TAG_SHIFT) | ((index as u64) << INDEX_SHIFT))
    }
}

impl From<u64> for Addr {
    fn from(raw: u64) -> Self {
        Self::new(raw)
    }
}

impl std::fmt::LowerHex for Addr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::LowerHex::fmt(&self.0, f)
    }
}
