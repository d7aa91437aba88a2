//! LS-8 Opcodes.
//!
//! Each opcode byte packs its own metadata: bits 6-7 hold the operand count, bit 5
//! marks ALU operations, bit 4 marks handlers that set the program counter, and bits
//! 0-3 identify the instruction.

use std::fmt;

/// Load immediate: `LDI reg, value`.
pub const LDI: u8 = 0b1000_0010;

/// Print register as decimal: `PRN reg`.
pub const PRN: u8 = 0b0100_0111;

/// Add: `ADD regA, regB`.
pub const ADD: u8 = 0b1010_0000;

/// Subtract: `SUB regA, regB`.
pub const SUB: u8 = 0b1010_0001;

/// Multiply: `MUL regA, regB`.
pub const MUL: u8 = 0b1010_0010;

/// Divide: `DIV regA, regB`.
pub const DIV: u8 = 0b1010_0011;

/// Bitwise AND: `AND regA, regB`.
pub const AND: u8 = 0b1010_1000;

/// Increment: `INC reg`.
pub const INC: u8 = 0b0110_0101;

/// Push register onto the stack: `PUSH reg`.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the stack into a register: `POP reg`.
pub const POP: u8 = 0b0100_0110;

/// Call the subroutine whose address is in a register: `CALL reg`.
pub const CALL: u8 = 0b0101_0000;

/// Return from subroutine: `RET`.
pub const RET: u8 = 0b0001_0001;

/// Compare two registers and set the flags: `CMP regA, regB`.
pub const CMP: u8 = 0b1010_0111;

/// Unconditional jump to the address in a register: `JMP reg`.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the equal flag is set: `JEQ reg`.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the equal flag is clear: `JNE reg`.
pub const JNE: u8 = 0b0101_0110;

/// Halt the machine: `HLT`.
pub const HLT: u8 = 0b0000_0001;

/// Every instruction the machine implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// See [`LDI`].
    Ldi = LDI,
    /// See [`PRN`].
    Prn = PRN,
    /// See [`ADD`].
    Add = ADD,
    /// See [`SUB`].
    Sub = SUB,
    /// See [`MUL`].
    Mul = MUL,
    /// See [`DIV`].
    Div = DIV,
    /// See [`AND`].
    And = AND,
    /// See [`INC`].
    Inc = INC,
    /// See [`PUSH`].
    Push = PUSH,
    /// See [`POP`].
    Pop = POP,
    /// See [`CALL`].
    Call = CALL,
    /// See [`RET`].
    Ret = RET,
    /// See [`CMP`].
    Cmp = CMP,
    /// See [`JMP`].
    Jmp = JMP,
    /// See [`JEQ`].
    Jeq = JEQ,
    /// See [`JNE`].
    Jne = JNE,
    /// See [`HLT`].
    Hlt = HLT,
}

impl Opcode {
    /// All opcodes, in table order.
    pub const ALL: [Self; 17] = [
        Self::Ldi,
        Self::Prn,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::And,
        Self::Inc,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Hlt,
    ];

    /// Looks up the opcode encoded by `byte`.
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.byte() == byte)
    }

    /// The encoded opcode byte.
    pub const fn byte(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::And => "AND",
            Self::Inc => "INC",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Hlt => "HLT",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
