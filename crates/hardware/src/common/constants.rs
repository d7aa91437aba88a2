//! Global Machine Constants.
//!
//! This module defines the fixed dimensions of the LS-8 machine. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **Register Constants:** Register file size and the stack pointer convention.
//! 3. **Encoding Constants:** Bit fields packed into every opcode byte.

/// Number of addressable memory cells (one byte each).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers (`R0`-`R7`).
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer.
pub const SP: usize = 7;

/// Initial stack pointer value.
///
/// The stack grows downward from here; `0xF4..=0xFF` is left for the stack top
/// and the reserved area.
pub const STACK_INIT: u8 = 0xF4;

/// Mask for the operand-count field (bits 6-7).
pub const OPERAND_COUNT_MASK: u8 = 0b1100_0000;

/// Shift for the operand-count field.
pub const OPERAND_COUNT_SHIFT: u32 = 6;

/// Bit set on opcodes executed by the ALU (bit 5).
pub const ALU_BIT: u8 = 0b0010_0000;

/// Bit set on opcodes whose handler writes the program counter itself (bit 4).
pub const SETS_PC_BIT: u8 = 0b0001_0000;

/// Mask for the instruction identifier (bits 0-3).
pub const INSTRUCTION_ID_MASK: u8 = 0b0000_1111;
