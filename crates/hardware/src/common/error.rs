//! Machine fault definitions.
//!
//! This module defines the error handling for the emulator core. It provides:
//! 1. **Fault Representation:** Every condition that stops the fetch-decode-execute loop.
//! 2. **Addressing Faults:** Out-of-range memory and register indices.
//! 3. **Error Handling:** Integration with standard Rust error traits through `thiserror`.
//!
//! Every fault is fatal to the running machine. There is no retry; the loop stops and the
//! fault is handed back to whoever called [`Cpu::run`](crate::core::Cpu::run).

use thiserror::Error;

use crate::core::units::alu::AluOp;

/// An index that fell outside a fixed-size machine resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum AddressingFault {
    /// Memory access outside `0..MEMORY_SIZE`.
    ///
    /// The associated value is the faulting address.
    #[error("memory address {addr:#x} is out of range")]
    Memory {
        /// The faulting address.
        addr: usize,
    },

    /// Register access outside `0..NUM_REGISTERS`.
    ///
    /// The associated value is the faulting register index.
    #[error("register index {index} is out of range")]
    Register {
        /// The faulting register index.
        index: usize,
    },
}

/// Fatal machine faults.
///
/// Raised by handlers, the ALU, or the loop itself. Once a fault is returned the
/// machine state is left exactly as it was at the point of failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Fault {
    /// Memory or register index outside its valid bounds.
    #[error("addressing fault: {0}")]
    Addressing(#[from] AddressingFault),

    /// The fetched byte has no dispatch entry.
    #[error("unknown opcode {opcode:#010b} at {pc:#04x}")]
    UnknownOpcode {
        /// The byte that was fetched.
        opcode: u8,
        /// Address it was fetched from.
        pc: usize,
    },

    /// `DIV` with a zero divisor.
    #[error("division by zero")]
    DivideByZero,

    /// A binary ALU operation was invoked without a source register.
    ///
    /// Only reachable by calling the ALU directly; dispatched handlers always supply
    /// the operands their operation needs.
    #[error("internal ALU error: {op:?} requires a source register")]
    AluMisuse {
        /// The operation that was requested.
        op: AluOp,
    },

    /// The console rejected a `PRN` write.
    #[error("console write failed: {0}")]
    Console(String),
}

impl Fault {
    /// Shorthand for a memory [`AddressingFault`].
    pub const fn memory(addr: usize) -> Self {
        Self::Addressing(AddressingFault::Memory { addr })
    }

    /// Shorthand for a register [`AddressingFault`].
    pub const fn register(index: usize) -> Self {
        Self::Addressing(AddressingFault::Register { index })
    }
}
