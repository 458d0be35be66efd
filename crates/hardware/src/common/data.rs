//! Access control and line transfer types.
//!
//! This module defines the values passed across every level of the hierarchy:
//! 1. **Control:** The read-enable / write-enable pair carried by each access.
//! 2. **Cache Line:** The fixed 8-word unit of transfer between levels.

use super::constants::WORDS_PER_LINE;

/// One cache line: 8 words in address order (word 0 is the lowest address).
pub type CacheLine = [u64; WORDS_PER_LINE];

/// An all-zero cache line.
pub const ZERO_LINE: CacheLine = [0; WORDS_PER_LINE];

/// Read/write enables for a single access.
///
/// Both enables may be set at once; the read then observes the contents
/// from before the write is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Control {
    /// Bit 0: return the addressed data.
    pub read: bool,
    /// Bit 1: store the supplied data.
    pub write: bool,
}

impl Control {
    /// Bit 0 of the control byte.
    pub const READ_ENABLE: u8 = 0x1;
    /// Bit 1 of the control byte.
    pub const WRITE_ENABLE: u8 = 0x2;

    /// Neither read nor write.
    pub const NONE: Self = Self {
        read: false,
        write: false,
    };
    /// Read only.
    pub const READ: Self = Self {
        read: true,
        write: false,
    };
    /// Write only.
    pub const WRITE: Self = Self {
        read: false,
        write: true,
    };
    /// Read the old contents, then write.
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };

    /// Decodes a control byte. Bits other than 0 and 1 are ignored.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            read: bits & Self::READ_ENABLE != 0,
            write: bits & Self::WRITE_ENABLE != 0,
        }
    }

    /// Encodes the enables back into a control byte.
    pub const fn bits(self) -> u8 {
        (if self.read { Self::READ_ENABLE } else { 0 })
            | (if self.write { Self::WRITE_ENABLE } else { 0 })
    }
}

impl From<u8> for Control {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}
