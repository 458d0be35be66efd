//! Unit tests for the memory subsystem.
