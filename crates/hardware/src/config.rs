//! Configuration system for the cache hierarchy simulator.
//!
//! This module defines the configuration consumed by the embedding driver
//! ([`Simulator`](crate::sim::Simulator)). It provides:
//! 1. **Defaults:** Baseline memory size and clock interrupt cadence.
//! 2. **Structures:** General, memory, and clock sections.
//! 3. **Loading:** JSON from a string or a file, followed by validation.
//!
//! The cache geometry itself is fixed (see [`constants`](crate::common::constants)) and
//! is not configurable.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::constants::{DEFAULT_CLOCK_INTERVAL, DEFAULT_MEMORY_BYTES, LINE_BYTES};
use crate::common::error::ConfigError;

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.memory.size_bytes, 1 << 25);
/// assert_eq!(config.clock.interrupt_interval, 8192);
/// ```
///
/// Deserializing from JSON; omitted sections fall back to their defaults:
///
/// ```
/// use cachesim_core::config::Config;
///
/// let config = Config::from_json(r#"{ "memory": { "size_bytes": 65536 } }"#).unwrap();
/// assert_eq!(config.memory.size_bytes, 65536);
/// assert_eq!(config.clock.interrupt_interval, 8192);
/// assert!(!config.general.trace_accesses);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Main memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Reference-bit aging cadence
    #[serde(default)]
    pub clock: ClockConfig,
}

impl Config {
    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and `ConfigError::Invalid` if
    /// validation fails.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`Config::from_json`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the configuration describes a usable hierarchy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when the memory size is zero or not a whole number
    /// of cache lines.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.memory.size_bytes;
        if size == 0 {
            return Err(ConfigError::Invalid("memory.size_bytes must be non-zero".into()));
        }
        if size % LINE_BYTES != 0 {
            return Err(ConfigError::Invalid(format!(
                "memory.size_bytes ({size}) must be a multiple of {LINE_BYTES}"
            )));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Log every CPU-facing access at `trace` level.
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Main memory configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Memory size in bytes; a multiple of 64.
    #[serde(default = "MemoryConfig::default_size_bytes")]
    pub size_bytes: u64,
}

impl MemoryConfig {
    /// Returns the default memory size (32 MiB).
    const fn default_size_bytes() -> u64 {
        DEFAULT_MEMORY_BYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            size_bytes: DEFAULT_MEMORY_BYTES,
        }
    }
}

/// Clock interrupt configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockConfig {
    /// Accesses between clock interrupts; 0 disables them.
    #[serde(default = "ClockConfig::default_interrupt_interval")]
    pub interrupt_interval: u64,
}

impl ClockConfig {
    /// Returns the default interval (8192 accesses).
    const fn default_interrupt_interval() -> u64 {
        DEFAULT_CLOCK_INTERVAL
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            interrupt_interval: DEFAULT_CLOCK_INTERVAL,
        }
    }
}
