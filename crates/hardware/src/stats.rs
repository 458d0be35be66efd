//! Hierarchy statistics collection and reporting.
//!
//! This module tracks what the memory subsystem did. It provides:
//! 1. **Traffic:** Total accesses split into reads and writes.
//! 2. **Misses:** L1 and L2 miss counts and derived miss rates.
//! 3. **Write-backs:** Dirty evictions out of L1 (into L2) and out of L2 (into memory).
//! 4. **Maintenance:** Number of clock interrupts delivered to the L1 reference bits.

use serde::Serialize;

/// Counters kept by the memory subsystem.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemStats {
    /// CPU-facing word accesses.
    pub accesses: u64,
    /// Accesses with the read enable set.
    pub reads: u64,
    /// Accesses with the write enable set.
    pub writes: u64,
    /// Accesses that missed in L1.
    pub l1_misses: u64,
    /// Line fetches that missed in L2.
    pub l2_misses: u64,
    /// Dirty lines evicted from L1 and written into L2.
    pub l1_writebacks: u64,
    /// Dirty lines evicted from L2 and written into memory.
    pub l2_writebacks: u64,
    /// Reference-bit sweeps performed.
    pub clock_interrupts: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"cache"`, `"writeback"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "cache", "writeback"];

impl MemStats {
    /// L1 misses as a fraction of accesses, or 0 with no accesses.
    pub fn l1_miss_rate(&self) -> f64 {
        ratio(self.l1_misses, self.accesses)
    }

    /// L2 misses as a fraction of L1 misses (L2 is only consulted on an L1 miss).
    pub fn l2_miss_rate(&self) -> f64 {
        ratio(self.l2_misses, self.l1_misses)
    }

    /// Returns the counters as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the serializer error; with plain integer fields this does not occur in practice.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. Pass an empty
    /// slice to print everything.
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);

        if want("summary") {
            println!("\n==========================================================");
            println!("CACHE HIERARCHY SIMULATION STATISTICS");
            println!("==========================================================");
            println!("mem.accesses             {}", self.accesses);
            println!("mem.reads                {}", self.reads);
            println!("mem.writes               {}", self.writes);
            println!("mem.clock_interrupts     {}", self.clock_interrupts);
            println!("----------------------------------------------------------");
        }
        if want("cache") {
            println!("CACHE HIERARCHY");
            println!(
                "  L1     accesses: {:<10} | misses: {:<10} | miss_rate: {:.2}%",
                self.accesses,
                self.l1_misses,
                self.l1_miss_rate() * 100.0
            );
            println!(
                "  L2     accesses: {:<10} | misses: {:<10} | miss_rate: {:.2}%",
                self.l1_misses,
                self.l2_misses,
                self.l2_miss_rate() * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("writeback") {
            println!("WRITE-BACKS");
            println!("  wb.l1_to_l2            {}", self.l1_writebacks);
            println!("  wb.l2_to_memory        {}", self.l2_writebacks);
            println!("==========================================================");
        }
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
