//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode byte at the program counter.
//! 2. **Decode:** Looks the opcode up in the dispatch table and decodes its metadata bits.
//! 3. **Execute:** Invokes the handler, which may write the program counter itself.
//! 4. **Advance:** Moves past the instruction unless the opcode owns the program counter
//!    or the handler halted the machine.

use super::Cpu;
use crate::common::Fault;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::OpcodeInfo;

impl Cpu {
    /// Runs until `HLT` or a fault.
    ///
    /// Sets the running flag, then executes instructions from the current program
    /// counter. On `HLT` the program counter is left on the `HLT` byte.
    ///
    /// # Errors
    ///
    /// Returns the first [`Fault`] raised. The machine is left exactly as the faulting
    /// instruction found it, still flagged as running.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::config::Config;
    /// use ls8_core::core::Cpu;
    /// use ls8_core::soc::BufferConsole;
    ///
    /// let out = BufferConsole::new();
    /// let mut cpu = Cpu::new(&Config::default(), Box::new(out.clone()));
    /// // LDI R0,8; PRN R0; HLT
    /// cpu.load_program(&[0b1000_0010, 0, 8, 0b0100_0111, 0, 0b0000_0001]).unwrap();
    /// cpu.run().unwrap();
    ///
    /// assert_eq!(out.values(), vec![8]);
    /// assert_eq!(cpu.pc, 5);
    /// assert!(!cpu.running);
    /// ```
    pub fn run(&mut self) -> Result<(), Fault> {
        self.running = true;
        tracing::debug!(pc = self.pc, "run started");
        while self.running {
            self.cycle()?;
        }
        tracing::debug!(
            pc = self.pc,
            retired = self.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }

    /// Executes exactly one instruction.
    ///
    /// Marks the machine as running first, so stepping a halted machine re-executes
    /// the instruction at the program counter (for a `HLT`, halting again in place).
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] raised by the instruction, if any.
    pub fn step(&mut self) -> Result<(), Fault> {
        self.running = true;
        self.cycle()
    }

    /// One fetch-decode-execute cycle.
    fn cycle(&mut self) -> Result<(), Fault> {
        let pc = self.pc;
        let result = self.execute_at(pc);
        if let Err(ref fault) = result {
            tracing::error!(pc, %fault, "machine fault");
        }
        result
    }

    fn execute_at(&mut self, pc: usize) -> Result<(), Fault> {
        let opcode = self.ram.read(pc)?;
        let handler = self
            .dispatch
            .lookup(opcode)
            .ok_or(Fault::UnknownOpcode { opcode, pc })?;
        let info = OpcodeInfo::decode(opcode);

        if self.trace {
            eprintln!("{}", self.trace_line());
        }
        if tracing::enabled!(tracing::Level::TRACE) {
            let window = &self.ram.as_slice()[pc..];
            tracing::trace!(pc, opcode, "{}", disassemble(window));
        }

        handler(self)?;
        self.stats.record(opcode, info);

        if !self.running {
            return Ok(());
        }
        if !info.sets_pc {
            self.pc = pc + info.size();
        }
        Ok(())
    }
}
