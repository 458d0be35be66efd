//! Error definitions.
//!
//! The hierarchy has only configuration-class failures; cache misses are ordinary
//! control flow and never surface here. It provides:
//! 1. **Memory Errors:** Bad memory sizes, failed allocation, and out-of-range line accesses.
//! 2. **Configuration Errors:** Failures while loading or validating a [`Config`](crate::config::Config).

use thiserror::Error;

/// Failures raised by main memory and propagated through the subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemError {
    /// Memory size is not a whole number of 64-byte cache lines.
    #[error("memory size {size} bytes is not a multiple of the 64-byte cache line")]
    InvalidConfiguration {
        /// The rejected size in bytes.
        size: u64,
    },

    /// The backing store for main memory could not be reserved.
    #[error("failed to allocate {size} bytes of main memory")]
    AllocationFailed {
        /// The requested size in bytes.
        size: u64,
    },

    /// A line-aligned address lies at or beyond the end of main memory.
    #[error("address {address:#x} is outside main memory ({size} bytes)")]
    OutOfBounds {
        /// The line-aligned, 48-bit masked address.
        address: u64,
        /// Configured memory size in bytes.
        size: u64,
    },
}

/// Failures raised while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an unusable hierarchy.
    #[error("invalid config: {0}")]
    Invalid(String),
}
