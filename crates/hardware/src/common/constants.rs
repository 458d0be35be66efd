//! Global Hierarchy Constants.
//!
//! This module defines the geometry shared by every level of the hierarchy. It includes:
//! 1. **Address Constants:** The 48-bit address mask and field positions.
//! 2. **Line Constants:** Word size, words per line, and line size.
//! 3. **Cache Geometry:** Set, way, and entry counts for L1 and L2.
//! 4. **Driver Defaults:** Memory size and clock interrupt cadence used by the embedding driver.

/// Mask keeping the low 48 bits of an address; bits 48-63 are ignored everywhere.
pub const ADDRESS_MASK: u64 = 0xFFFF_FFFF_FFFF;

/// Number of bytes in a word (64-bit words).
pub const WORD_BYTES: u64 = 8;

/// Number of words in a cache line.
pub const WORDS_PER_LINE: usize = 8;

/// Size of a cache line in bytes (8 words of 8 bytes).
pub const LINE_BYTES: u64 = WORD_BYTES * WORDS_PER_LINE as u64;

/// Mask selecting the byte offset within a line (bits 0-5).
pub const LINE_OFFSET_MASK: u64 = LINE_BYTES - 1;

/// Bit position of the word-offset field.
pub const WORD_OFFSET_SHIFT: u32 = 3;

/// Mask for the word-offset field after shifting (3 bits).
pub const WORD_OFFSET_MASK: u64 = 0x7;

/// Bit position of the index field, shared by L1 and L2.
pub const INDEX_SHIFT: u32 = 6;

/// Number of L1 set-index bits (bits 6-13).
pub const L1_INDEX_BITS: u32 = 8;

/// Number of sets in the L1 cache.
pub const L1_NUM_SETS: usize = 1 << L1_INDEX_BITS;

/// Associativity of the L1 cache.
pub const L1_WAYS: usize = 4;

/// Bit position of the L1 tag (bits 14-47).
pub const L1_TAG_SHIFT: u32 = INDEX_SHIFT + L1_INDEX_BITS;

/// Width mask of an L1 tag (34 bits).
pub const L1_TAG_MASK: u64 = (1 << (48 - L1_TAG_SHIFT)) - 1;

/// Number of L2 index bits (bits 6-20).
pub const L2_INDEX_BITS: u32 = 15;

/// Number of entries in the direct-mapped L2 cache.
pub const L2_NUM_ENTRIES: usize = 1 << L2_INDEX_BITS;

/// Bit position of the L2 tag (bits 21-47).
pub const L2_TAG_SHIFT: u32 = INDEX_SHIFT + L2_INDEX_BITS;

/// Width mask of an L2 tag (27 bits).
pub const L2_TAG_MASK: u64 = (1 << (48 - L2_TAG_SHIFT)) - 1;

/// Default main memory size used by the driver (32 MiB).
pub const DEFAULT_MEMORY_BYTES: u64 = 1 << 25;

/// Default number of accesses between clock interrupts (8K).
pub const DEFAULT_CLOCK_INTERVAL: u64 = 1 << 13;
