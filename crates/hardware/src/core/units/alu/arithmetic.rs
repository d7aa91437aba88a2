//! ALU arithmetic operations.
//!
//! Implements addition, subtraction, multiplication, division and increment over
//! byte-wide operands. Overflow wraps modulo 256; division truncates toward zero.

use super::AluOp;
use crate::common::Fault;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be an arithmetic variant).
/// * `a`  - Destination register value.
/// * `b`  - Source register value (ignored by `Inc`).
///
/// # Errors
///
/// [`Fault::DivideByZero`] for `Div` with `b == 0`; [`Fault::AluMisuse`] for a
/// non-arithmetic `op`.
pub fn execute(op: AluOp, a: u8, b: u8) -> Result<u8, Fault> {
    match op {
        AluOp::Add => Ok(a.wrapping_add(b)),
        AluOp::Sub => Ok(a.wrapping_sub(b)),
        AluOp::Mul => Ok(a.wrapping_mul(b)),
        AluOp::Div => a.checked_div(b).ok_or(Fault::DivideByZero),
        AluOp::Inc => Ok(a.wrapping_add(1)),
        AluOp::And | AluOp::Cmp => Err(Fault::AluMisuse { op }),
    }
}
