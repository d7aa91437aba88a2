//! Condition Flags.
//!
//! This module implements the three comparison flags. It performs the following:
//! 1. **Storage:** Equal, greater-than and less-than bits.
//! 2. **Update Policy:** Whether `CMP` clears stale flags before recording a result.
//! 3. **Encoding:** Packing into the conventional `00000LGE` flags byte for traces.

use serde::Deserialize;
use std::cmp::Ordering;

/// How `CMP` treats flags left over from an earlier comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum FlagPolicy {
    /// Clear all three flags, then set the one matching the new comparison.
    ///
    /// Exactly one flag is set after every `CMP`.
    #[default]
    Clear,
    /// Only ever set flags; a flag raised by an earlier `CMP` stays raised.
    ///
    /// Reproduces legacy LS-8 emulators where, for example, the equal flag sticks
    /// after a later unequal comparison.
    Sticky,
}

/// Comparison flags produced by `CMP` and consumed by `JEQ`/`JNE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Flags {
    /// `reg[a] == reg[b]` at the last comparison.
    pub equal: bool,
    /// `reg[a] > reg[b]` at the last comparison.
    pub greater: bool,
    /// `reg[a] < reg[b]` at the last comparison.
    pub less: bool,
    policy: FlagPolicy,
}

impl Flags {
    /// All flags clear, using `policy` for future comparisons.
    pub const fn with_policy(policy: FlagPolicy) -> Self {
        Self {
            equal: false,
            greater: false,
            less: false,
            policy,
        }
    }

    /// The update policy in effect.
    pub const fn policy(&self) -> FlagPolicy {
        self.policy
    }

    /// Records the outcome of a comparison.
    pub fn record(&mut self, ordering: Ordering) {
        if matches!(self.policy, FlagPolicy::Clear) {
            self.equal = false;
            self.greater = false;
            self.less = false;
        }
        match ordering {
            Ordering::Equal => self.equal = true,
            Ordering::Greater => self.greater = true,
            Ordering::Less => self.less = true,
        }
    }

    /// Packs the flags as `00000LGE`.
    pub const fn bits(&self) -> u8 {
        ((self.less as u8) << 2) | ((self.greater as u8) << 1) | (self.equal as u8)
    }
}
