//! Opcode metadata decoding.
//!
//! Provides bit extraction for the metadata fields every LS-8 opcode carries and the
//! [`OpcodeInfo`] summary the fetch-decode-execute loop relies on.

use crate::common::constants::{
    ALU_BIT, INSTRUCTION_ID_MASK, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT, SETS_PC_BIT,
};

/// Trait for extracting metadata fields from an opcode byte.
pub trait OpcodeBits {
    /// Number of operand bytes following the opcode (bits 6-7).
    fn operand_count(&self) -> u8;

    /// Whether the opcode is an ALU operation (bit 5).
    fn is_alu(&self) -> bool;

    /// Whether the handler writes the program counter itself (bit 4).
    ///
    /// When set, the loop must not advance the program counter after the handler
    /// returns.
    fn sets_pc(&self) -> bool;

    /// Instruction identifier (bits 0-3).
    fn instruction_id(&self) -> u8;
}

impl OpcodeBits for u8 {
    #[inline]
    fn operand_count(&self) -> u8 {
        (self & OPERAND_COUNT_MASK) >> OPERAND_COUNT_SHIFT
    }

    #[inline]
    fn is_alu(&self) -> bool {
        self & ALU_BIT != 0
    }

    #[inline]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_BIT != 0
    }

    #[inline]
    fn instruction_id(&self) -> u8 {
        self & INSTRUCTION_ID_MASK
    }
}

/// Metadata decoded once from an opcode byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OpcodeInfo {
    /// Operand bytes following the opcode (0-3; only 0-2 are used).
    pub operand_count: u8,
    /// Executed by the ALU.
    pub is_alu: bool,
    /// Handler owns the program counter.
    pub sets_pc: bool,
}

impl OpcodeInfo {
    /// Decodes the metadata bits of `byte`.
    pub fn decode(byte: u8) -> Self {
        Self {
            operand_count: byte.operand_count(),
            is_alu: byte.is_alu(),
            sets_pc: byte.sets_pc(),
        }
    }

    /// Total instruction length in bytes (opcode plus operands).
    pub const fn size(self) -> usize {
        1 + self.operand_count as usize
    }
}
