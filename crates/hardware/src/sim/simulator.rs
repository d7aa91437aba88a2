//! Simulator: owns the CPU and enforces the run budget.
//!
//! `Cpu::run` loops until `HLT` with no upper bound. The simulator adds what a front end
//! needs on top: loading a program file under the configured line policy and stopping
//! runaway programs after `general.max_steps` instructions.

use std::path::Path;

use super::SimError;
use super::loader::{self, MalformedLinePolicy, Program};
use crate::config::Config;
use crate::core::Cpu;
use crate::soc::Console;

/// Top-level simulator.
#[derive(Debug)]
pub struct Simulator {
    /// Machine state.
    pub cpu: Cpu,
    max_steps: Option<u64>,
    line_policy: MalformedLinePolicy,
}

impl Simulator {
    /// Creates a simulator with a freshly reset CPU.
    pub fn new(config: &Config, console: Box<dyn Console>) -> Self {
        Self {
            cpu: Cpu::new(config, console),
            max_steps: config.general.max_steps,
            line_policy: config.loader.malformed_lines,
        }
    }

    /// Places a parsed program in memory from address 0.
    ///
    /// # Errors
    ///
    /// [`SimError::Fault`] if the image does not fit in memory.
    pub fn load(&mut self, program: &Program) -> Result<(), SimError> {
        self.cpu.load_program(&program.bytes)?;
        Ok(())
    }

    /// Reads, parses and loads a program file using the configured line policy.
    ///
    /// # Errors
    ///
    /// [`SimError::Load`] for unreadable or rejected programs.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<Program, SimError> {
        let program = loader::load_program_file(path, self.line_policy)?;
        self.load(&program)?;
        Ok(program)
    }

    /// Runs from the current program counter until `HLT`.
    ///
    /// # Errors
    ///
    /// * [`SimError::Fault`] when the machine faults.
    /// * [`SimError::StepLimit`] when `max_steps` instructions retire without halting.
    pub fn run(&mut self) -> Result<(), SimError> {
        let Some(limit) = self.max_steps else {
            self.cpu.run()?;
            return Ok(());
        };

        self.cpu.running = true;
        tracing::debug!(pc = self.cpu.pc, limit, "run started");
        let mut steps = 0;
        while self.cpu.running {
            if steps == limit {
                tracing::warn!(limit, pc = self.cpu.pc, "step limit reached");
                return Err(SimError::StepLimit { limit });
            }
            self.cpu.step()?;
            steps += 1;
        }
        tracing::debug!(
            pc = self.cpu.pc,
            retired = self.cpu.stats.instructions_retired,
            "halted"
        );
        Ok(())
    }
}
