//! Unit tests for the LS-8 instruction set.


/// Dispatch table population and lookup.
pub mod dispatch;
