//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the eight byte-wide
//! general-purpose registers. It provides:
//! 1. **Storage:** `R0`-`R7`, with `R7` doubling as the stack pointer.
//! 2. **Bounds Checking:** Every indexed access validates the register index.
//! 3. **Observability:** Dumping register state for fatal diagnostics.

use super::constants::{NUM_REGISTERS, SP, STACK_INIT};
use super::error::Fault;

/// General-purpose register file.
///
/// All registers start at zero except the stack pointer, which is seeded to
/// [`STACK_INIT`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file in its power-on state.
    pub const fn new() -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP] = STACK_INIT;
        Self { regs }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    ///
    /// # Errors
    ///
    /// Returns a register [`AddressingFault`](crate::common::AddressingFault) when `idx`
    /// is 8 or above.
    pub fn read(&self, idx: usize) -> Result<u8, Fault> {
        self.regs.get(idx).copied().ok_or(Fault::register(idx))
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The byte to store.
    ///
    /// # Errors
    ///
    /// Returns a register [`AddressingFault`](crate::common::AddressingFault) when `idx`
    /// is 8 or above.
    pub fn write(&mut self, idx: usize, val: u8) -> Result<(), Fault> {
        let slot = self.regs.get_mut(idx).ok_or(Fault::register(idx))?;
        *slot = val;
        Ok(())
    }

    /// Current stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.regs[SP]
    }

    /// Overwrites the stack pointer (`R7`).
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP] = val;
    }

    /// All registers in index order.
    pub const fn as_slice(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Dumps the contents of all registers to stderr.
    pub fn dump(&self) {
        for (i, chunk) in self.regs.chunks(4).enumerate() {
            let base = i * 4;
            eprintln!(
                "R{}={:#04x} R{}={:#04x} R{}={:#04x} R{}={:#04x}",
                base,
                chunk[0],
                base + 1,
                chunk[1],
                base + 2,
                chunk[2],
                base + 3,
                chunk[3]
            );
        }
    }
}
