//! Instruction Disassembler for the LS-8.
//!
//! Renders instructions as assembly text for debug tracing, the CLI listing and test
//! diagnostics.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(&[0b1000_0010, 0, 8]), "LDI R0, 8");
//! assert_eq!(disassemble(&[0b1010_0000, 1, 2]), "ADD R1, R2");
//! assert_eq!(disassemble(&[0xFF]), ".byte 0xFF");
//! ```

use crate::isa::instruction::OpcodeInfo;
use crate::isa::opcodes::Opcode;

/// Formats operand byte `i` (1-based) of `bytes`, or `??` past the end.
fn operand(bytes: &[u8], i: usize) -> String {
    bytes.get(i).map_or_else(|| "??".to_string(), u8::to_string)
}

/// Disassembles the instruction at the start of `bytes`.
///
/// Unknown opcodes render as `.byte 0xNN`; operands missing from a truncated window
/// render as `??`. An empty window renders as an empty string.
pub fn disassemble(bytes: &[u8]) -> String {
    let Some(&byte) = bytes.first() else {
        return String::new();
    };
    let Some(op) = Opcode::from_byte(byte) else {
        return format!(".byte 0x{byte:02X}");
    };

    let a = operand(bytes, 1);
    let b = operand(bytes, 2);
    match op {
        Opcode::Ldi => format!("{op} R{a}, {b}"),
        Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div | Opcode::And | Opcode::Cmp => {
            format!("{op} R{a}, R{b}")
        }
        Opcode::Prn
        | Opcode::Inc
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{op} R{a}"),
        Opcode::Ret | Opcode::Hlt => op.to_string(),
    }
}

/// Linear listing of a program image as `(address, text)` pairs.
///
/// Walks the image using each opcode's operand count. Unknown bytes are listed one at a
/// time, so data embedded in the program shows up as `.byte` lines.
pub fn listing(program: &[u8]) -> Vec<(usize, String)> {
    let mut out = Vec::new();
    let mut addr = 0;
    while addr < program.len() {
        let window = &program[addr..];
        out.push((addr, disassemble(window)));
        addr += match Opcode::from_byte(program[addr]) {
            Some(op) => OpcodeInfo::decode(op.byte()).size(),
            None => 1,
        };
    }
    out
}
