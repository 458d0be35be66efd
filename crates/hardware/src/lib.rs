//! Two-level cache hierarchy simulator library.
//!
//! This crate implements a deterministic functional model of a unified L1/L2 write-back
//! cache hierarchy in front of main memory:
//! 1. **Caches:** 4-way set-associative L1 with NRU replacement; direct-mapped L2.
//! 2. **Memory:** Line-granular main memory with 48-bit address masking and bounds checks.
//! 3. **Subsystem:** The CPU-facing word access path and its miss/write-back cascade.
//! 4. **Simulation:** Configuration, periodic clock interrupts, and statistics.

/// L1 and L2 caches and NRU replacement.
pub mod cache;
/// Common types and constants (addresses, control, cache lines, errors).
pub mod common;
/// Simulator configuration (defaults, JSON loading, validation).
pub mod config;
/// Main memory backing store.
pub mod memory;
/// Embedding driver that delivers periodic clock interrupts.
pub mod sim;
/// Hierarchy statistics collection and reporting.
pub mod stats;
/// CPU-facing memory subsystem.
pub mod subsystem;

/// Root configuration type; use `Config::default()` or load JSON.
pub use crate::config::Config;
/// Embedding driver; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// The L1 + L2 + memory hierarchy; construct with `MemorySubsystem::new`.
pub use crate::subsystem::MemorySubsystem;
