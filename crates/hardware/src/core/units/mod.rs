//! Execution units.
//!
//! The LS-8 has a single functional unit: the integer ALU.

/// Arithmetic Logic Unit.
pub mod alu;

pub use alu::{Alu, AluOp};
