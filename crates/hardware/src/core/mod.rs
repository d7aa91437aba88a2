//! Core processor implementation.
//!
//! This module contains the CPU state and execution loop, the flags, and the ALU.

/// Architectural state beyond registers and memory (flags).
pub mod arch;

/// CPU state, instruction handlers and the fetch-decode-execute loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
