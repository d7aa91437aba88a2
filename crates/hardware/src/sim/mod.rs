//! Simulation front door and program loading.
//!
//! Provides the program loader, the [`Simulator`](simulator::Simulator) driver that
//! wraps a [`Cpu`](crate::core::Cpu) with a step budget, and [`SimError`], the error
//! type front ends deal with.

pub mod loader;
pub mod simulator;

use thiserror::Error;

use crate::common::Fault;
use crate::config::ConfigError;

pub use loader::{LoadError, MalformedLinePolicy, Program};
pub use simulator::Simulator;

/// Anything that can stop a simulation session.
#[derive(Debug, Error)]
pub enum SimError {
    /// The machine faulted.
    #[error(transparent)]
    Fault(#[from] Fault),

    /// The program could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The configured instruction budget ran out before `HLT`.
    #[error("step limit of {limit} instructions reached without HLT")]
    StepLimit {
        /// The configured budget.
        limit: u64,
    },
}
