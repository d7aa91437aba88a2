//! Main Memory.
//!
//! This module implements the LS-8's flat byte-addressed memory. It provides:
//! 1. **Storage:** 256 zero-initialised cells shared by program bytes and the stack.
//! 2. **Bounds Checking:** Reads and writes outside the address space raise a fault.
//! 3. **Loading:** Bulk copy of a program image starting at a given address.

use crate::common::Fault;
use crate::common::constants::MEMORY_SIZE;

/// Fixed-size machine memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: [u8; MEMORY_SIZE],
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.cells.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &MEMORY_SIZE)
            .field("nonzero_cells", &used)
            .finish()
    }
}

impl Memory {
    /// Creates a zeroed memory.
    pub const fn new() -> Self {
        Self {
            cells: [0; MEMORY_SIZE],
        }
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns a memory [`AddressingFault`](crate::common::AddressingFault) when `addr`
    /// is outside `0..MEMORY_SIZE`.
    pub fn read(&self, addr: usize) -> Result<u8, Fault> {
        self.cells.get(addr).copied().ok_or(Fault::memory(addr))
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns a memory [`AddressingFault`](crate::common::AddressingFault) when `addr`
    /// is outside `0..MEMORY_SIZE`.
    pub fn write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        let cell = self.cells.get_mut(addr).ok_or(Fault::memory(addr))?;
        *cell = val;
        Ok(())
    }

    /// Copies `data` into memory starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns a memory [`AddressingFault`](crate::common::AddressingFault) naming the
    /// first address past the end when the image does not fit. Memory is left untouched
    /// in that case.
    pub fn load(&mut self, data: &[u8], offset: usize) -> Result<(), Fault> {
        let end = offset
            .checked_add(data.len())
            .filter(|&end| end <= MEMORY_SIZE)
            .ok_or(Fault::memory(MEMORY_SIZE.max(offset)))?;
        self.cells[offset..end].copy_from_slice(data);
        Ok(())
    }

    /// Raw view of every cell.
    pub const fn as_slice(&self) -> &[u8; MEMORY_SIZE] {
        &self.cells
    }
}
