//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which serves as the container for the
//! entire machine state. It coordinates the following:
//! 1. **State Management:** Registers, memory, program counter, flags and the running flag.
//! 2. **Dispatch:** The opcode table built once at construction.
//! 3. **Observability:** Trace lines, state dumps and execution statistics.
//!
//! Every mutation goes through `&mut Cpu`, so a single owner drives the machine at a time;
//! running the loop while another caller pokes at state is rejected at compile time.

/// Fetch-decode-execute loop.
pub mod execution;

/// Per-opcode instruction handlers.
pub mod handlers;

use crate::common::{Fault, RegisterFile};
use crate::config::Config;
use crate::core::arch::Flags;
use crate::isa::dispatch::DispatchTable;
use crate::soc::{Console, Memory, StdoutConsole};
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
pub struct Cpu {
    /// General-purpose registers (`R7` is the stack pointer).
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Memory,
    /// Program Counter.
    pub pc: usize,
    /// Comparison flags.
    pub flags: Flags,
    /// Set while the loop runs; cleared only by `HLT`.
    pub running: bool,
    /// Print a trace line to stderr before every instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,

    console: Box<dyn Console>,
    dispatch: DispatchTable,
}

impl std::fmt::Debug for Cpu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cpu")
            .field("pc", &self.pc)
            .field("regs", &self.regs)
            .field("flags", &self.flags)
            .field("running", &self.running)
            .field("ram", &self.ram)
            .finish_non_exhaustive()
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default(), Box::new(StdoutConsole))
    }
}

impl Cpu {
    /// Creates a CPU in its power-on state.
    ///
    /// Memory and registers are zero except the stack pointer (`0xF4`); the program
    /// counter is 0, all flags are clear and the machine is halted.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration (flag policy, tracing).
    /// * `console` - Destination for `PRN` output.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            regs: RegisterFile::new(),
            ram: Memory::new(),
            pc: 0,
            flags: Flags::with_policy(config.cpu.flag_policy),
            running: false,
            trace: config.general.trace_instructions,
            stats: SimStats::default(),
            console,
            dispatch: DispatchTable::new(),
        }
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns a memory addressing fault if the image is larger than memory.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), Fault> {
        self.ram.load(program, 0)
    }

    /// Reads a memory cell.
    ///
    /// # Errors
    ///
    /// Memory addressing fault for `addr >= 256`.
    pub fn ram_read(&self, addr: usize) -> Result<u8, Fault> {
        self.ram.read(addr)
    }

    /// Writes a memory cell.
    ///
    /// # Errors
    ///
    /// Memory addressing fault for `addr >= 256`.
    pub fn ram_write(&mut self, addr: usize, val: u8) -> Result<(), Fault> {
        self.ram.write(addr, val)
    }

    /// Replaces the console, returning the previous one.
    pub fn set_console(&mut self, console: Box<dyn Console>) -> Box<dyn Console> {
        std::mem::replace(&mut self.console, console)
    }

    /// Renders the machine state as a single trace line.
    ///
    /// Format: `TRACE: PC | M[PC] M[PC+1] M[PC+2] | R0 .. R7`, all two-digit hex.
    /// Cells past the end of memory print as `00`.
    pub fn trace_line(&self) -> String {
        let cell = |off: usize| self.ram.read(self.pc + off).unwrap_or(0);
        let mut line = format!(
            "TRACE: {:02X} | {:02X} {:02X} {:02X} |",
            self.pc,
            cell(0),
            cell(1),
            cell(2)
        );
        for r in self.regs.as_slice() {
            line.push_str(&format!(" {r:02X}"));
        }
        line
    }

    /// Dumps the program counter, flags and registers to stderr.
    pub fn dump_state(&self) {
        eprintln!(
            "PC={:#04x} FL={:#05b} running={}",
            self.pc,
            self.flags.bits(),
            self.running
        );
        self.regs.dump();
    }
}
