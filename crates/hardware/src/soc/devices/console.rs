//! Console implementations.
//!
//! 1. **`StdoutConsole`:** One decimal value per line on standard output.
//! 2. **`BufferConsole`:** Captures values in memory; clones share the same buffer.

use crate::soc::traits::Console;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Writes each value as a decimal line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&mut self, value: u8) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{value}")
    }
}

/// Records every printed value.
///
/// Cloning yields a handle onto the same buffer, so a caller can hand one clone to
/// the machine and read results back through another.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    values: Arc<Mutex<Vec<u8>>>,
}

impl BufferConsole {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values printed so far, oldest first.
    pub fn values(&self) -> Vec<u8> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Printed values rendered the way [`StdoutConsole`] would have written them.
    pub fn rendered(&self) -> String {
        self.values().iter().map(|v| format!("{v}\n")).collect()
    }
}

impl Console for BufferConsole {
    fn print(&mut self, value: u8) -> io::Result<()> {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(value);
        Ok(())
    }
}
