//! Memory Subsystem.
//!
//! The single entry point the CPU uses to read and write words. It owns the L1 cache,
//! the L2 cache, and main memory, and resolves misses by cascading down the hierarchy:
//!
//! 1. **L1 miss:** fetch the line from L2 (resolving an L2 miss first), install it in
//!    L1, and push any dirty L1 victim into L2.
//! 2. **L2 miss:** fetch the line from memory when the miss came from a read, install
//!    it in L2, and write any dirty L2 victim back to memory.
//!
//! Reference bits in L1 are only aged when the embedding system calls
//! [`MemorySubsystem::handle_clock_interrupt`]; the subsystem never schedules it.

use crate::cache::{Eviction, L1Cache, L2Cache, Lookup};
use crate::common::{CacheLine, Control, MemError, ZERO_LINE};
use crate::memory::MainMemory;
use crate::stats::MemStats;

/// Why an L2 line is being allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum L2Fill {
    /// A read needs the line's current contents from memory.
    Read,
    /// The caller is about to overwrite the whole line; memory is not consulted.
    Write,
}

/// L1 + L2 + main memory, driven one word at a time.
#[derive(Debug, Clone)]
pub struct MemorySubsystem {
    l1: L1Cache,
    l2: L2Cache,
    memory: MainMemory,
    stats: MemStats,
}

impl MemorySubsystem {
    /// Builds main memory, then L2, then L1, with all counters at zero.
    ///
    /// # Errors
    ///
    /// Propagates `MemError::InvalidConfiguration` or `MemError::AllocationFailed`
    /// from main memory.
    pub fn new(memory_size_in_bytes: u64) -> Result<Self, MemError> {
        let memory = MainMemory::new(memory_size_in_bytes)?;
        let l2 = L2Cache::new();
        let l1 = L1Cache::new();
        tracing::debug!(memory_size_in_bytes, "memory subsystem initialized");
        Ok(Self {
            l1,
            l2,
            memory,
            stats: MemStats::default(),
        })
    }

    /// Reads and/or writes one word.
    ///
    /// # Arguments
    ///
    /// * `address` - Word address; bits 48-63 are ignored.
    /// * `write_data` - Word stored when `control.write` is set.
    /// * `control` - Read/write enables.
    ///
    /// # Returns
    ///
    /// The word read (pre-write value) when `control.read` is set.
    ///
    /// # Errors
    ///
    /// Returns `MemError::OutOfBounds` if resolving a miss touches a line outside memory.
    pub fn access(
        &mut self,
        address: u64,
        write_data: u64,
        control: Control,
    ) -> Result<Option<u64>, MemError> {
        self.stats.accesses += 1;
        self.stats.reads += u64::from(control.read);
        self.stats.writes += u64::from(control.write);

        if let Lookup::Hit(data) = self.l1.access(address, write_data, control) {
            return Ok(data);
        }

        self.stats.l1_misses += 1;
        tracing::trace!(address = format_args!("{address:#x}"), "L1 miss");
        self.handle_l1_miss(address)?;

        match self.l1.access(address, write_data, control) {
            Lookup::Hit(data) => Ok(data),
            // Unreachable: the line was installed in the set this address maps to.
            Lookup::Miss => Ok(None),
        }
    }

    /// Reads one word.
    ///
    /// # Errors
    ///
    /// See [`MemorySubsystem::access`].
    pub fn read(&mut self, address: u64) -> Result<u64, MemError> {
        Ok(self.access(address, 0, Control::READ)?.unwrap_or_default())
    }

    /// Writes one word.
    ///
    /// # Errors
    ///
    /// See [`MemorySubsystem::access`].
    pub fn write(&mut self, address: u64, value: u64) -> Result<(), MemError> {
        let _ = self.access(address, value, Control::WRITE)?;
        Ok(())
    }

    /// Clears every L1 reference bit so NRU sees fresh recency information.
    pub fn handle_clock_interrupt(&mut self) {
        self.stats.clock_interrupts += 1;
        tracing::trace!("clock interrupt: clearing L1 reference bits");
        self.l1.clear_reference_bits();
    }

    /// Number of accesses that missed in L1 since the last reset.
    pub const fn l1_miss_count(&self) -> u64 {
        self.stats.l1_misses
    }

    /// Number of L1-miss line fetches that missed in L2 since the last reset.
    pub const fn l2_miss_count(&self) -> u64 {
        self.stats.l2_misses
    }

    /// Zeroes every counter without touching cache or memory contents.
    pub fn reset_counters(&mut self) {
        self.stats = MemStats::default();
    }

    /// Returns the counters.
    pub const fn stats(&self) -> &MemStats {
        &self.stats
    }

    /// Returns the L1 cache for inspection.
    pub const fn l1(&self) -> &L1Cache {
        &self.l1
    }

    /// Returns the L2 cache for inspection.
    pub const fn l2(&self) -> &L2Cache {
        &self.l2
    }

    /// Returns main memory for inspection.
    pub const fn memory(&self) -> &MainMemory {
        &self.memory
    }

    /// Brings the line containing `address` into L1.
    fn handle_l1_miss(&mut self, address: u64) -> Result<(), MemError> {
        let line = match self.l2.access(address, &ZERO_LINE, Control::READ) {
            Lookup::Hit(line) => line,
            Lookup::Miss => {
                self.stats.l2_misses += 1;
                tracing::trace!(address = format_args!("{address:#x}"), "L2 miss");
                self.handle_l2_miss(address, L2Fill::Read)?;
                self.l2.access(address, &ZERO_LINE, Control::READ).into_data()
            }
        }
        .unwrap_or(ZERO_LINE);

        if let Some(victim) = self.l1.insert_line(address, &line) {
            self.write_back_l1_victim(&victim)?;
        }
        Ok(())
    }

    /// Deposits a dirty L1 victim in L2, allocating an L2 entry for it if needed.
    fn write_back_l1_victim(&mut self, victim: &Eviction) -> Result<(), MemError> {
        self.stats.l1_writebacks += 1;
        tracing::debug!(
            address = format_args!("{:#x}", victim.address),
            "L1 write-back to L2"
        );
        if self
            .l2
            .access(victim.address, &victim.line, Control::WRITE)
            .is_hit()
        {
            return Ok(());
        }
        self.handle_l2_miss(victim.address, L2Fill::Write)?;
        let _ = self.l2.access(victim.address, &victim.line, Control::WRITE);
        Ok(())
    }

    /// Allocates an L2 entry for the line containing `address`.
    fn handle_l2_miss(&mut self, address: u64, fill: L2Fill) -> Result<(), MemError> {
        let line: CacheLine = match fill {
            L2Fill::Read => self.memory.read_line(address)?,
            L2Fill::Write => ZERO_LINE,
        };

        if let Some(victim) = self.l2.insert_line(address, &line) {
            self.stats.l2_writebacks += 1;
            tracing::debug!(
                address = format_args!("{:#x}", victim.address),
                "L2 write-back to memory"
            );
            self.memory.write_line(victim.address, &victim.line)?;
        }
        Ok(())
    }
}
