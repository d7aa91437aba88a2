//! # Dispatch Table Tests

use ls8_core::isa::Opcode;
use ls8_core::isa::dispatch::DispatchTable;
use pretty_assertions::assert_eq;

#[test]
fn table_holds_one_handler_per_opcode() {
    let table = DispatchTable::new();
    assert_eq!(table.len(), Opcode::ALL.len());
    assert!(!table.is_empty());
}

#[test]
fn every_opcode_has_a_handler() {
    let table = DispatchTable::default();
    for op in Opcode::ALL {
        assert!(table.lookup(op.byte()).is_some(), "{op} missing");
    }
}

#[test]
fn unassigned_bytes_have_no_handler() {
    let table = DispatchTable::new();
    let unassigned = (0..=u8::MAX)
        .filter(|b| Opcode::from_byte(*b).is_none())
        .filter(|b| table.lookup(*b).is_some())
        .count();
    assert_eq!(unassigned, 0);
}
