//! Instruction handlers.
//!
//! One method per opcode. Operands sit at `pc+1` and `pc+2`. Handlers leave the program
//! counter alone unless their opcode carries the PC-setting bit, in which case they are
//! solely responsible for it (including the not-taken path of a conditional jump).
//!
//! Stack discipline: `R7` addresses the most recently pushed byte. Pushing decrements
//! then writes; popping reads then increments. Stack pointer arithmetic wraps.

use super::Cpu;
use crate::common::Fault;
use crate::common::constants::SP;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::instruction::OpcodeInfo;
use crate::isa::opcodes;

impl Cpu {
    /// Operand byte `n` positions after the opcode.
    fn operand(&self, n: usize) -> Result<u8, Fault> {
        self.ram.read(self.pc + n)
    }

    /// Operand byte `n` interpreted as a register index.
    fn reg_operand(&self, n: usize) -> Result<usize, Fault> {
        self.operand(n).map(usize::from)
    }

    /// Value of the register named by operand byte `n`.
    fn reg_operand_value(&self, n: usize) -> Result<u8, Fault> {
        self.regs.read(self.reg_operand(n)?)
    }

    /// Decrements the stack pointer and stores `value` at the new top.
    pub(crate) fn push_value(&mut self, value: u8) -> Result<(), Fault> {
        let sp = self.regs.sp().wrapping_sub(1);
        self.regs.set_sp(sp);
        self.ram.write(usize::from(sp), value)
    }

    /// Reads the top of the stack and increments the stack pointer.
    pub(crate) fn pop_value(&mut self) -> Result<u8, Fault> {
        let sp = self.regs.sp();
        let value = self.ram.read(usize::from(sp))?;
        self.regs.set_sp(sp.wrapping_add(1));
        Ok(value)
    }

    fn alu_binary(&mut self, op: AluOp) -> Result<(), Fault> {
        let a = self.reg_operand(1)?;
        let b = self.reg_operand(2)?;
        Alu::apply(op, &mut self.regs, &mut self.flags, a, Some(b))
    }

    /// `pc = target` when `taken`, otherwise step over the one-operand jump.
    fn branch(&mut self, opcode: u8, taken: bool) -> Result<(), Fault> {
        let target = self.reg_operand_value(1)?;
        if taken {
            self.pc = usize::from(target);
        } else {
            self.pc += OpcodeInfo::decode(opcode).size();
        }
        Ok(())
    }

    pub(crate) fn op_ldi(&mut self) -> Result<(), Fault> {
        let reg = self.reg_operand(1)?;
        let value = self.operand(2)?;
        self.regs.write(reg, value)
    }

    pub(crate) fn op_prn(&mut self) -> Result<(), Fault> {
        let value = self.reg_operand_value(1)?;
        self.console
            .print(value)
            .map_err(|e| Fault::Console(e.to_string()))?;
        self.stats.values_printed += 1;
        Ok(())
    }

    pub(crate) fn op_add(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::Add)
    }

    pub(crate) fn op_sub(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::Sub)
    }

    pub(crate) fn op_mul(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::Mul)
    }

    pub(crate) fn op_div(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::Div)
    }

    pub(crate) fn op_and(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::And)
    }

    pub(crate) fn op_cmp(&mut self) -> Result<(), Fault> {
        self.alu_binary(AluOp::Cmp)
    }

    pub(crate) fn op_inc(&mut self) -> Result<(), Fault> {
        let reg = self.reg_operand(1)?;
        Alu::apply(AluOp::Inc, &mut self.regs, &mut self.flags, reg, None)
    }

    /// `PUSH R7` stores the already-decremented stack pointer.
    pub(crate) fn op_push(&mut self) -> Result<(), Fault> {
        let reg = self.reg_operand(1)?;
        let value = if reg == SP {
            self.regs.sp().wrapping_sub(1)
        } else {
            self.regs.read(reg)?
        };
        self.push_value(value)
    }

    /// `POP R7` loads the popped byte and then increments it.
    pub(crate) fn op_pop(&mut self) -> Result<(), Fault> {
        let reg = self.reg_operand(1)?;
        let sp = self.regs.sp();
        let value = self.ram.read(usize::from(sp))?;
        self.regs.write(reg, value)?;
        self.regs.set_sp(self.regs.sp().wrapping_add(1));
        Ok(())
    }

    pub(crate) fn op_call(&mut self) -> Result<(), Fault> {
        let target = self.reg_operand_value(1)?;
        let ret = self.pc + OpcodeInfo::decode(opcodes::CALL).size();
        let ret = u8::try_from(ret).map_err(|_| Fault::memory(ret))?;
        self.push_value(ret)?;
        self.pc = usize::from(target);
        Ok(())
    }

    pub(crate) fn op_ret(&mut self) -> Result<(), Fault> {
        self.pc = usize::from(self.pop_value()?);
        Ok(())
    }

    pub(crate) fn op_jmp(&mut self) -> Result<(), Fault> {
        self.pc = usize::from(self.reg_operand_value(1)?);
        Ok(())
    }

    pub(crate) fn op_jeq(&mut self) -> Result<(), Fault> {
        self.branch(opcodes::JEQ, self.flags.equal)
    }

    pub(crate) fn op_jne(&mut self) -> Result<(), Fault> {
        self.branch(opcodes::JNE, !self.flags.equal)
    }

    pub(crate) fn op_hlt(&mut self) -> Result<(), Fault> {
        self.running = false;
        Ok(())
    }
}
