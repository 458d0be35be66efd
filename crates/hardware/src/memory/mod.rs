//! Simulated Main Memory.
//!
//! This module implements the bottom tier of the hierarchy. It provides:
//! 1. **Buffer:** Zero-filled word storage (`WordBuffer`).
//! 2. **Memory:** Line-granular reads and writes with 48-bit masking and bounds checks.

/// Word storage backing main memory.
pub mod buffer;

use self::buffer::WordBuffer;
use crate::common::constants::WORD_BYTES;
use crate::common::{Addr, CacheLine, Control, LINE_BYTES, MemError};

/// Flat, byte-addressable backing store accessed only in whole cache lines.
#[derive(Debug, Clone)]
pub struct MainMemory {
    buffer: WordBuffer,
    size_bytes: u64,
}

impl MainMemory {
    /// Allocates and zero-fills `size_bytes` of memory.
    ///
    /// # Errors
    ///
    /// * `MemError::InvalidConfiguration` if `size_bytes` is not a multiple of 64.
    /// * `MemError::AllocationFailed` if the storage cannot be reserved.
    pub fn new(size_bytes: u64) -> Result<Self, MemError> {
        if size_bytes % LINE_BYTES != 0 {
            return Err(MemError::InvalidConfiguration { size: size_bytes });
        }
        let num_words = usize::try_from(size_bytes / WORD_BYTES)
            .map_err(|_| MemError::AllocationFailed { size: size_bytes })?;
        let buffer = WordBuffer::new(num_words, size_bytes)?;
        tracing::debug!(size_bytes, "main memory initialized");
        Ok(Self { buffer, size_bytes })
    }

    /// Returns the configured size in bytes.
    pub const fn size_in_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Reads and/or writes the line containing `address`.
    ///
    /// The address is masked to 48 bits and rounded down to its line base. With both
    /// enables set, the returned line holds the contents from before the write.
    ///
    /// # Arguments
    ///
    /// * `address` - Any address within the target line.
    /// * `write_data` - Line stored when `control.write` is set.
    /// * `control` - Read/write enables.
    ///
    /// # Returns
    ///
    /// `Some(line)` when `control.read` is set, otherwise `None`.
    ///
    /// # Errors
    ///
    /// Returns `MemError::OutOfBounds` if the line base is at or beyond the memory size.
    pub fn access(
        &mut self,
        address: u64,
        write_data: &CacheLine,
        control: Control,
    ) -> Result<Option<CacheLine>, MemError> {
        let first_word = self.line_word_index(address)?;
        let read = control.read.then(|| self.buffer.read_line(first_word));
        if control.write {
            self.buffer.write_line(first_word, write_data);
        }
        Ok(read)
    }

    /// Reads the line containing `address`.
    ///
    /// # Errors
    ///
    /// Returns `MemError::OutOfBounds` if the line lies outside memory.
    pub fn read_line(&self, address: u64) -> Result<CacheLine, MemError> {
        let first_word = self.line_word_index(address)?;
        Ok(self.buffer.read_line(first_word))
    }

    /// Overwrites the line containing `address`.
    ///
    /// # Errors
    ///
    /// Returns `MemError::OutOfBounds` if the line lies outside memory.
    pub fn write_line(&mut self, address: u64, line: &CacheLine) -> Result<(), MemError> {
        let first_word = self.line_word_index(address)?;
        self.buffer.write_line(first_word, line);
        Ok(())
    }

    /// Reads the word at `address` straight from memory, bypassing the caches.
    ///
    /// Returns `None` if the word lies outside memory.
    pub fn peek_word(&self, address: u64) -> Option<u64> {
        let addr = Addr::new(address);
        if addr.val() >= self.size_bytes {
            return None;
        }
        self.buffer.word((addr.val() / WORD_BYTES) as usize)
    }

    fn line_word_index(&self, address: u64) -> Result<usize, MemError> {
        let base = Addr::new(address).line_base().val();
        if base >= self.size_bytes {
            return Err(MemError::OutOfBounds {
                address: base,
                size: self.size_bytes,
            });
        }
        Ok((base / WORD_BYTES) as usize)
    }
}
