//! LS-8 architectural state beyond the register file.
//!
//! Registers and memory live in [`common`](crate::common) and [`soc`](crate::soc); this
//! module holds the comparison flags.

/// Condition flags and their update policy.
pub mod flags;

pub use flags::{FlagPolicy, Flags};
