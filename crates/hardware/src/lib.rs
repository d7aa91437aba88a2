//! LS-8 emulator library.
//!
//! This crate implements an emulator for the LS-8, an 8-bit register machine with
//! 256 bytes of memory, with the following:
//! 1. **Core:** Register file, flags, the ALU and the fetch-decode-execute loop.
//! 2. **ISA:** Opcode values, metadata decoding, dispatch table and disassembler.
//! 3. **Machine:** Flat memory and the console behind `PRN`.
//! 4. **Simulation:** Program loader, configuration, step-limited driver and statistics.
//!
//! # Example
//!
//! ```
//! use ls8_core::{Config, Cpu};
//! use ls8_core::soc::BufferConsole;
//!
//! let out = BufferConsole::new();
//! let mut cpu = Cpu::new(&Config::default(), Box::new(out.clone()));
//! // LDI R0,6; LDI R1,7; MUL R0,R1; PRN R0; HLT
//! cpu.load_program(&[
//!     0b1000_0010, 0, 6,
//!     0b1000_0010, 1, 7,
//!     0b1010_0010, 0, 1,
//!     0b0100_0111, 0,
//!     0b0000_0001,
//! ]).unwrap();
//! cpu.run().unwrap();
//! assert_eq!(out.rendered(), "42\n");
//! ```

/// Common types and constants (registers, faults, machine dimensions).
pub mod common;
/// Emulator configuration.
pub mod config;
/// CPU core (state, handlers, execution loop, flags, ALU).
pub mod core;
/// Instruction set (opcodes, metadata, dispatch, disassembly).
pub mod isa;
/// Program loading and the step-limited simulator.
pub mod sim;
/// Memory and console.
pub mod soc;
/// Execution statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, flags and the dispatch table.
pub use crate::core::Cpu;
/// Step-limited driver around a [`Cpu`].
pub use crate::sim::Simulator;
