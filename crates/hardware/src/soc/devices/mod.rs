//! Devices attached to the machine.
//!
//! The LS-8 has a single output device: the console that receives `PRN` values.

/// Standard-output and in-memory console implementations.
pub mod console;

pub use console::{BufferConsole, StdoutConsole};
