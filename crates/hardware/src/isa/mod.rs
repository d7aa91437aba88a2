//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the LS-8 opcode values, the metadata packed into each opcode byte, the
//! dispatch table that maps opcodes to handlers, and a disassembler.

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode to handler dispatch table.
pub mod dispatch;

/// Opcode metadata bit extraction.
pub mod instruction;

/// Opcode values and the [`Opcode`](opcodes::Opcode) enum.
pub mod opcodes;

pub use instruction::{OpcodeBits, OpcodeInfo};
pub use opcodes::Opcode;
