//! Common types and constants used throughout the LS-8 emulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Constants:** Memory size, register count, stack pointer convention, opcode bit fields.
//! 2. **Error Handling:** Machine faults raised by the core.
//! 3. **Register Management:** The bounds-checked register file.

/// Machine-wide constants.
pub mod constants;

/// Fault definitions.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP, STACK_INIT};
pub use error::{AddressingFault, Fault};
pub use reg::RegisterFile;
