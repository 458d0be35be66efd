//! Shared helpers for hierarchy tests.

use std::collections::HashMap;

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
///
/// Filtering follows `RUST_LOG`; with it unset nothing is printed.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds an address from an L1 tag, set index, and word offset.
pub const fn l1_addr(tag: u64, set: u64, word: u64) -> u64 {
    (tag << 14) | (set << 6) | (word << 3)
}

/// Builds an address from an L2 tag, index, and word offset.
pub const fn l2_addr(tag: u64, index: u64, word: u64) -> u64 {
    (tag << 21) | (index << 6) | (word << 3)
}

/// A line whose words are `base`, `base + 1`, ..., `base + 7`.
pub fn line_from(base: u64) -> [u64; 8] {
    std::array::from_fn(|i| base + i as u64)
}

/// Flat word-addressed reference model; unwritten words read as zero.
#[derive(Debug, Default)]
pub struct WordModel {
    words: HashMap<u64, u64>,
}

impl WordModel {
    /// Records a write (address masked to 48 bits and aligned to its word).
    pub fn write(&mut self, address: u64, value: u64) {
        let _ = self.words.insert(Self::key(address), value);
    }

    /// Returns the last value written, or zero.
    pub fn read(&self, address: u64) -> u64 {
        self.words.get(&Self::key(address)).copied().unwrap_or(0)
    }

    const fn key(address: u64) -> u64 {
        address & 0xFFFF_FFFF_FFF8
    }
}

/// Small deterministic linear congruential generator for long reproducible runs.
#[derive(Debug)]
pub struct Lcg(u64);

impl Lcg {
    /// Seeds the generator.
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 11
    }
}
