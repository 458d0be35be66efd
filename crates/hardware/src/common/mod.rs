//! Common utilities and types used throughout the cache hierarchy simulator.
//!
//! This module provides the building blocks shared by every level. It includes:
//! 1. **Address Types:** A masked 48-bit address with field decomposition.
//! 2. **Constants:** Line geometry and the L1/L2 field layouts.
//! 3. **Access Data:** The control enables and the cache-line transfer type.
//! 4. **Error Handling:** Memory and configuration error types.

/// Address type and field decomposition.
pub mod addr;

/// Geometry constants for lines, L1, and L2.
pub mod constants;

/// Control enables and cache-line type.
pub mod data;

/// Error types.
pub mod error;

pub use addr::Addr;
pub use constants::{LINE_BYTES, WORDS_PER_LINE};
pub use data::{CacheLine, Control, ZERO_LINE};
pub use error::{ConfigError, MemError};
