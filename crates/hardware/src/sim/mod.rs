//! Embedding driver.
//!
//! Wraps a [`MemorySubsystem`] the way a host system would: it counts accesses and
//! delivers a clock interrupt every `interrupt_interval` of them, which keeps the L1
//! NRU reference bits meaningful without the subsystem scheduling anything itself.

use crate::common::{Control, MemError};
use crate::config::Config;
use crate::stats::MemStats;
use crate::subsystem::MemorySubsystem;

/// A memory subsystem plus periodic clock interrupts.
#[derive(Debug, Clone)]
pub struct Simulator {
    subsystem: MemorySubsystem,
    interrupt_interval: u64,
    trace_accesses: bool,
    ticks: u64,
}

impl Simulator {
    /// Builds the hierarchy described by `config`.
    ///
    /// # Errors
    ///
    /// Propagates memory construction errors (bad size, failed allocation).
    pub fn new(config: &Config) -> Result<Self, MemError> {
        let subsystem = MemorySubsystem::new(config.memory.size_bytes)?;
        tracing::info!(
            memory_bytes = config.memory.size_bytes,
            interrupt_interval = config.clock.interrupt_interval,
            "simulator ready"
        );
        Ok(Self {
            subsystem,
            interrupt_interval: config.clock.interrupt_interval,
            trace_accesses: config.general.trace_accesses,
            ticks: 0,
        })
    }

    /// Performs one access, then delivers a clock interrupt if the interval elapsed.
    ///
    /// # Errors
    ///
    /// See [`MemorySubsystem::access`].
    pub fn access(
        &mut self,
        address: u64,
        write_data: u64,
        control: Control,
    ) -> Result<Option<u64>, MemError> {
        if self.trace_accesses {
            tracing::trace!(
                address = format_args!("{address:#x}"),
                control = control.bits(),
                write_data,
                "access"
            );
        }
        let result = self.subsystem.access(address, write_data, control)?;
        self.tick();
        Ok(result)
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

    /// Zeroes the subsystem counters and restarts the interrupt countdown.
    pub fn reset_counters(&mut self) {
        self.subsystem.reset_counters();
        self.ticks = 0;
    }

    /// Returns the subsystem counters.
    pub const fn stats(&self) -> &MemStats {
        self.subsystem.stats()
    }

    /// Returns the wrapped subsystem.
    pub const fn subsystem(&self) -> &MemorySubsystem {
        &self.subsystem
    }

    fn tick(&mut self) {
        if self.interrupt_interval == 0 {
            return;
        }
        self.ticks += 1;
        if self.ticks == self.interrupt_interval {
            self.ticks = 0;
            self.subsystem.handle_clock_interrupt();
        }
    }
}
