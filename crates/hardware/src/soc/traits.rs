//! Console trait for the `PRN` observation channel.
//!
//! The core never writes to stdout directly. `PRN` hands each value to whatever
//! [`Console`] the machine was built with, which keeps the core testable and lets
//! front ends redirect output.

use std::io;

/// Sink for values printed by the running program.
pub trait Console {
    /// Emits one printed register value.
    ///
    /// # Errors
    ///
    /// Propagates any I/O error from the underlying sink; the machine turns it into a
    /// fatal [`Fault::Console`](crate::common::Fault::Console).
    fn print(&mut self, value: u8) -> io::Result<()>;
}
