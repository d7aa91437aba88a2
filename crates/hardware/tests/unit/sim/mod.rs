//! Simulation layer tests.


/// The step-limited simulator.
pub mod simulator;

/// The sample programs shipped in `programs/`.
pub mod programs;
