//! # Flag Tests
//!
//! Verifies `CMP` flag recording under the clearing and sticky policies.

use ls8_core::config::{Config, FlagPolicy};
use ls8_core::core::arch::Flags;
use pretty_assertions::assert_eq;
use std::cmp::Ordering;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn default_flags_are_clear_and_clearing() {
    let flags = Flags::default();
    assert_eq!(flags.bits(), 0);
    assert_eq!(flags.policy(), FlagPolicy::Clear);
}

#[test]
fn bits_pack_as_lge() {
    let mut flags = Flags::default();
    flags.record(Ordering::Less);
    assert_eq!(flags.bits(), 0b100);
    flags.record(Ordering::Greater);
    assert_eq!(flags.bits(), 0b010);
    flags.record(Ordering::Equal);
    assert_eq!(flags.bits(), 0b001);
}

#[test]
fn sticky_policy_accumulates() {
    let mut flags = Flags::with_policy(FlagPolicy::Sticky);
    flags.record(Ordering::Equal);
    flags.record(Ordering::Less);
    assert!(flags.equal);
    assert!(flags.less);
    assert!(!flags.greater);
    assert_eq!(flags.bits(), 0b101);
}

/// CMP equal, CMP less, then JEQ. A clearing machine falls through; a sticky
/// machine still sees the first equality and jumps.
fn stale_equality_program() -> Vec<u8> {
    ProgramBuilder::new()
        .ldi(0, 5)
        .ldi(1, 5)
        .ldi(2, 9)
        .ldi(3, 26)
        .cmp(0, 1)
        .cmp(0, 2)
        .jeq(3)
        .ldi(4, 1)
        .prn(4)
        .hlt()
        .pad_to(26)
        .ldi(4, 2)
        .prn(4)
        .hlt()
        .build()
}

#[test]
fn clear_policy_forgets_previous_comparison() {
    let mut ctx = TestContext::new().load(&stale_equality_program());
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![1]);
    assert!(ctx.cpu.flags.less);
    assert!(!ctx.cpu.flags.equal);
}

#[test]
fn sticky_policy_keeps_previous_comparison() {
    let mut config = Config::default();
    config.cpu.flag_policy = FlagPolicy::Sticky;
    let mut ctx = TestContext::with_config(&config).load(&stale_equality_program());
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![2]);
}
