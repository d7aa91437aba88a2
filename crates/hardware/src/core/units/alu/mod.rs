//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the LS-8 ALU. It reads its operands straight from the
//! register file, writes results back to the destination register, and records
//! comparison results in the flags.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, Mul, Div, Inc
//! - [`logic`]:      And, Cmp

/// Integer arithmetic operations (add, subtract, multiply, divide, increment).
pub mod arithmetic;

/// Bitwise and comparison operations.
pub mod logic;

use crate::common::{Fault, RegisterFile};
use crate::core::arch::Flags;

/// Operations understood by the ALU.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// `reg[dest] += reg[src]`, wrapping.
    Add,
    /// `reg[dest] -= reg[src]`, wrapping.
    Sub,
    /// `reg[dest] *= reg[src]`, wrapping.
    Mul,
    /// `reg[dest] /= reg[src]`; faults on a zero divisor.
    Div,
    /// `reg[dest] &= reg[src]`.
    And,
    /// `reg[dest] += 1`, wrapping. Takes no source register.
    Inc,
    /// Compares `reg[dest]` with `reg[src]` and updates the flags.
    Cmp,
}

impl AluOp {
    /// Whether the operation reads a source register.
    pub const fn needs_source(self) -> bool {
        !matches!(self, Self::Inc)
    }
}

/// Arithmetic Logic Unit.
///
/// Stateless: every call works on the register file and flags handed to it.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Applies `op` to `reg[dest]` and, for binary operations, `reg[src]`.
    ///
    /// On any error the registers and flags are left untouched.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `regs`  - Register file holding the operands; receives the result.
    /// * `flags` - Updated by `Cmp` only.
    /// * `dest`  - Destination (and first operand) register index.
    /// * `src`   - Source register index; `None` for `Inc`.
    ///
    /// # Errors
    ///
    /// * [`Fault::Addressing`] for a register index outside `R0`-`R7`.
    /// * [`Fault::DivideByZero`] for `Div` when `reg[src] == 0`.
    /// * [`Fault::AluMisuse`] when a binary operation is missing `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::common::RegisterFile;
    /// use ls8_core::core::arch::Flags;
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// let mut regs = RegisterFile::new();
    /// let mut flags = Flags::default();
    /// regs.write(0, 200).unwrap();
    /// regs.write(1, 100).unwrap();
    ///
    /// Alu::apply(AluOp::Add, &mut regs, &mut flags, 0, Some(1)).unwrap();
    /// assert_eq!(regs.read(0).unwrap(), 44); // 300 wraps to 44
    ///
    /// Alu::apply(AluOp::Cmp, &mut regs, &mut flags, 0, Some(1)).unwrap();
    /// assert!(flags.less);
    /// ```
    pub fn apply(
        op: AluOp,
        regs: &mut RegisterFile,
        flags: &mut Flags,
        dest: usize,
        src: Option<usize>,
    ) -> Result<(), Fault> {
        let a = regs.read(dest)?;
        let b = match src {
            Some(idx) => regs.read(idx)?,
            None if op.needs_source() => return Err(Fault::AluMisuse { op }),
            None => 0,
        };

        match op {
            AluOp::Add | AluOp::Sub | AluOp::Mul | AluOp::Div | AluOp::Inc => {
                regs.write(dest, arithmetic::execute(op, a, b)?)
            }
            AluOp::And => regs.write(dest, logic::and(a, b)),
            AluOp::Cmp => {
                flags.record(logic::compare(a, b));
                Ok(())
            }
        }
    }
}
