//! Execution statistics collection and reporting.
//!
//! This module tracks what the emulator did during a run. It provides:
//! 1. **Throughput:** Retired instructions and host wall-clock time.
//! 2. **Instruction mix:** Counts by category (ALU, control flow, stack, I/O, other).
//! 3. **Output:** Number of values emitted by `PRN`.

use std::time::{Duration, Instant};

use crate::isa::instruction::OpcodeInfo;
use crate::isa::opcodes;

/// Execution statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions that completed without a fault.
    pub instructions_retired: u64,

    /// ALU instructions retired (opcode bit 5 set).
    pub inst_alu: u64,
    /// Instructions that set the program counter (opcode bit 4 set).
    pub inst_control: u64,
    /// `PUSH`/`POP` instructions retired.
    pub inst_stack: u64,
    /// `PRN` instructions retired.
    pub inst_io: u64,
    /// Everything else (`LDI`, `HLT`).
    pub inst_other: u64,

    /// Values written to the console.
    pub values_printed: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_control: 0,
            inst_stack: 0,
            inst_io: 0,
            inst_other: 0,
            values_printed: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction.
    pub fn record(&mut self, opcode: u8, info: OpcodeInfo) {
        self.instructions_retired += 1;
        if info.is_alu {
            self.inst_alu += 1;
        } else if info.sets_pc {
            self.inst_control += 1;
        } else {
            match opcode {
                opcodes::PUSH | opcodes::POP => self.inst_stack += 1,
                opcodes::PRN => self.inst_io += 1,
                _ => self.inst_other += 1,
            }
        }
    }

    /// Host time since the statistics were created.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints a summary block to stderr.
    pub fn print(&self) {
        let seconds = self.elapsed().as_secs_f64();
        let retired = self.instructions_retired;
        let pct = |n: u64| {
            if retired == 0 {
                0.0
            } else {
                n as f64 / retired as f64 * 100.0
            }
        };

        eprintln!("\n==========================================================");
        eprintln!("LS-8 EMULATION STATISTICS");
        eprintln!("==========================================================");
        eprintln!("host_seconds             {seconds:.4} s");
        eprintln!("sim_insts                {retired}");
        eprintln!("sim_prints               {}", self.values_printed);
        eprintln!("----------------------------------------------------------");
        eprintln!("INSTRUCTION MIX");
        eprintln!("  op.alu                 {} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
        eprintln!(
            "  op.control             {} ({:.2}%)",
            self.inst_control,
            pct(self.inst_control)
        );
        eprintln!(
            "  op.stack               {} ({:.2}%)",
            self.inst_stack,
            pct(self.inst_stack)
        );
        eprintln!("  op.io                  {} ({:.2}%)", self.inst_io, pct(self.inst_io));
        eprintln!(
            "  op.other               {} ({:.2}%)",
            self.inst_other,
            pct(self.inst_other)
        );
        eprintln!("==========================================================");
    }
}
