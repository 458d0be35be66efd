//! Word Buffer Implementation.
//!
//! This module provides the backing storage for main memory: a zero-filled run of
//! 64-bit words that is read and written a whole cache line at a time. Allocation
//! is fallible so that an oversized memory request surfaces as an error instead of
//! aborting the process.

use crate::common::{CacheLine, MemError, WORDS_PER_LINE};

/// Zero-initialized word storage, addressed by line number.
#[derive(Debug, Clone)]
pub struct WordBuffer {
    words: Vec<u64>,
}

impl WordBuffer {
    /// Allocates `num_words` zeroed words.
    ///
    /// # Arguments
    ///
    /// * `num_words` - Number of 64-bit words; must be a multiple of `WORDS_PER_LINE`.
    /// * `size_bytes` - Requested size in bytes, reported in the error on failure.
    ///
    /// # Errors
    ///
    /// Returns `MemError::AllocationFailed` if the host cannot reserve the storage.
    pub fn new(num_words: usize, size_bytes: u64) -> Result<Self, MemError> {
        let mut words = Vec::new();
        words
            .try_reserve_exact(num_words)
            .map_err(|_| MemError::AllocationFailed { size: size_bytes })?;
        words.resize(num_words, 0);
        Ok(Self { words })
    }

    /// Returns the number of words held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the buffer holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Copies out the line that begins at word `first_word`.
    ///
    /// # Panics
    ///
    /// Panics if the line extends past the end of the buffer; callers bounds-check first.
    pub fn read_line(&self, first_word: usize) -> CacheLine {
        let mut line = [0; WORDS_PER_LINE];
        line.copy_from_slice(&self.words[first_word..first_word + WORDS_PER_LINE]);
        line
    }

    /// Overwrites the line that begins at word `first_word`.
    ///
    /// # Panics
    ///
    /// Panics if the line extends past the end of the buffer; callers bounds-check first.
    pub fn write_line(&mut self, first_word: usize, line: &CacheLine) {
        self.words[first_word..first_word + WORDS_PER_LINE].copy_from_slice(line);
    }

    /// Reads a single word.
    pub fn word(&self, index: usize) -> Option<u64> {
        self.words.get(index).copied()
    }
}
