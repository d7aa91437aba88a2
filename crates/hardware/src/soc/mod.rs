//! Machine Components.
//!
//! This module organizes the storage and I/O attached to the LS-8 core: the flat
//! memory array and the console that backs the `PRN` instruction.

/// Console implementations.
pub mod devices;

/// Main memory.
pub mod memory;

/// The [`Console`](traits::Console) seam.
pub mod traits;

pub use devices::{BufferConsole, StdoutConsole};
pub use memory::Memory;
pub use traits::Console;
