//! Opcode dispatch table.
//!
//! Maps every opcode byte to its handler. Built once when a [`Cpu`] is constructed;
//! bytes with no entry are unknown opcodes.

use crate::common::Fault;
use crate::core::Cpu;
use crate::isa::opcodes::Opcode;

/// An instruction handler.
pub type Handler = fn(&mut Cpu) -> Result<(), Fault>;

/// 256-entry table from opcode byte to handler.
#[derive(Clone)]
pub struct DispatchTable {
    table: [Option<Handler>; 256],
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.table.iter().filter(|h| h.is_some()).count();
        f.debug_struct("DispatchTable")
            .field("entries", &entries)
            .finish()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchTable {
    /// Builds the table for the full instruction set.
    pub fn new() -> Self {
        let mut table: [Option<Handler>; 256] = [None; 256];
        for op in Opcode::ALL {
            table[usize::from(op.byte())] = Some(handler_for(op));
        }
        Self { table }
    }

    /// Handler registered for `opcode`, if any.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Handler> {
        self.table[usize::from(opcode)]
    }

    /// Number of opcodes with a handler.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|h| h.is_some()).count()
    }

    /// Whether the table has no handlers at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn handler_for(op: Opcode) -> Handler {
    match op {
        Opcode::Ldi => Cpu::op_ldi,
        Opcode::Prn => Cpu::op_prn,
        Opcode::Add => Cpu::op_add,
        Opcode::Sub => Cpu::op_sub,
        Opcode::Mul => Cpu::op_mul,
        Opcode::Div => Cpu::op_div,
        Opcode::And => Cpu::op_and,
        Opcode::Inc => Cpu::op_inc,
        Opcode::Push => Cpu::op_push,
        Opcode::Pop => Cpu::op_pop,
        Opcode::Call => Cpu::op_call,
        Opcode::Ret => Cpu::op_ret,
        Opcode::Cmp => Cpu::op_cmp,
        Opcode::Jmp => Cpu::op_jmp,
        Opcode::Jeq => Cpu::op_jeq,
        Opcode::Jne => Cpu::op_jne,
        Opcode::Hlt => Cpu::op_hlt,
    }
}
