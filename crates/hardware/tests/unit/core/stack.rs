//! # Stack and Subroutine Tests
//!
//! `R7` starts at `0xF4` and addresses the most recently pushed byte.

use ls8_core::common::{Fault, SP, STACK_INIT};
use ls8_core::isa::opcodes::CALL;
use pretty_assertions::assert_eq;

use crate::common::builder::program::ProgramBuilder;
use crate::common::harness::TestContext;

#[test]
fn push_then_pop_moves_value_and_restores_sp() {
    let program = ProgramBuilder::new().ldi(0, 5).push(0).pop(1).hlt().build();
    let mut ctx = TestContext::new().load(&program);

    ctx.step_n(2).unwrap();
    assert_eq!(ctx.get_reg(SP), 0xF3);
    assert_eq!(ctx.mem(0xF3), 5);

    ctx.run().unwrap();
    assert_eq!(ctx.get_reg(1), 5);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
}

#[test]
fn stack_program_prints_in_reverse() {
    let program = ProgramBuilder::new()
        .ldi(0, 1)
        .ldi(1, 2)
        .push(0)
        .push(1)
        .pop(2)
        .prn(2)
        .pop(2)
        .prn(2)
        .hlt()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![2, 1]);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
}

#[test]
fn push_sp_stores_decremented_pointer() {
    let mut ctx = TestContext::new().load(&ProgramBuilder::new().push(7).build());
    ctx.step_n(1).unwrap();
    assert_eq!(ctx.get_reg(SP), 0xF3);
    assert_eq!(ctx.mem(0xF3), 0xF3);
}

#[test]
fn pop_sp_increments_loaded_value() {
    let program = ProgramBuilder::new().ldi(0, 0x40).push(0).pop(7).build();
    let mut ctx = TestContext::new().load(&program);
    ctx.step_n(3).unwrap();
    assert_eq!(ctx.get_reg(SP), 0x41);
}

#[test]
fn stack_pointer_wraps_below_zero() {
    let mut ctx = TestContext::new().load(&ProgramBuilder::new().push(0).pop(1).build());
    ctx.set_reg(SP, 0);
    ctx.set_reg(0, 0x99);
    ctx.step_n(1).unwrap();
    assert_eq!(ctx.get_reg(SP), 0xFF);
    assert_eq!(ctx.mem(0xFF), 0x99);
    ctx.step_n(1).unwrap();
    assert_eq!(ctx.get_reg(SP), 0);
    assert_eq!(ctx.get_reg(1), 0x99);
}

#[test]
fn call_pushes_return_address_and_ret_resumes_after_call() {
    // 0: LDI R1,8   3: CALL R1   5: HLT   8: RET
    let program = ProgramBuilder::new()
        .ldi(1, 8)
        .call(1)
        .hlt()
        .pad_to(8)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);

    ctx.step_n(2).unwrap();
    assert_eq!(ctx.cpu.pc, 8);
    assert_eq!(ctx.get_reg(SP), 0xF3);
    assert_eq!(ctx.mem(0xF3), 5);

    ctx.step_n(1).unwrap();
    assert_eq!(ctx.cpu.pc, 5);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);

    ctx.run().unwrap();
    assert_eq!(ctx.cpu.pc, 5);
}

#[test]
fn subroutine_increment_is_visible_to_caller() {
    // 0: LDI R0,5   3: LDI R1,13   6: CALL R1   8: PRN R0   10: HLT   13: INC R0; RET
    let program = ProgramBuilder::new()
        .ldi(0, 5)
        .ldi(1, 13)
        .call(1)
        .prn(0)
        .hlt()
        .pad_to(13)
        .inc(0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![6]);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
}

#[test]
fn subroutine_that_saves_its_register_restores_it() {
    // PUSH R0; INC R0; POP R0; RET leaves the caller's R0 as it was.
    let program = ProgramBuilder::new()
        .ldi(0, 5)
        .ldi(1, 13)
        .call(1)
        .prn(0)
        .hlt()
        .pad_to(13)
        .push(0)
        .inc(0)
        .pop(0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![5]);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
}

#[test]
fn subroutine_saving_scratch_register_returns_result() {
    // Subroutine doubles R0 using R2 as scratch, preserving the caller's R2.
    let program = ProgramBuilder::new()
        .ldi(0, 21)
        .ldi(2, 7)
        .ldi(1, 20)
        .call(1)
        .prn(0)
        .prn(2)
        .hlt()
        .pad_to(20)
        .push(2)
        .ldi(2, 2)
        .mul(0, 2)
        .pop(2)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![42, 7]);
}

#[test]
fn nested_calls_unwind_in_order() {
    // main calls A (at 20), A calls B (at 40), B prints 2, A prints 1, main prints 0.
    let program = ProgramBuilder::new()
        .ldi(1, 20)
        .ldi(2, 40)
        .ldi(0, 0)
        .call(1)
        .prn(0)
        .hlt()
        .pad_to(20)
        .call(2)
        .ldi(0, 1)
        .prn(0)
        .ldi(0, 0)
        .ret()
        .pad_to(40)
        .ldi(0, 2)
        .prn(0)
        .ret()
        .build();
    let mut ctx = TestContext::new().load(&program);
    ctx.run().unwrap();
    assert_eq!(ctx.output(), vec![2, 1, 0]);
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
}

#[test]
fn call_whose_return_address_leaves_memory_faults() {
    let mut ctx = TestContext::new();
    ctx.cpu.ram_write(254, CALL).unwrap();
    ctx.cpu.ram_write(255, 1).unwrap();
    ctx.cpu.pc = 254;
    assert_eq!(ctx.step_n(1), Err(Fault::memory(256)));
    assert_eq!(ctx.get_reg(SP), STACK_INIT);
    assert_eq!(ctx.cpu.pc, 254);
}
