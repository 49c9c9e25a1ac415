//! Register footprint of a program.

use crate::instruction::Register;
use crate::program::Program;
use std::collections::BTreeSet;

/// Minimum register file length a program needs.
///
/// Register 0 is the output slot and is always counted, so the result is at
/// least 1 even for the empty program. Saturates at `usize::MAX` for a
/// program referencing register `usize::MAX`, which `validate_program`
/// rejects.
pub fn required_memory(program: &Program) -> usize {
    program
        .iter()
        .map(|inst| inst.max_register().index())
        .max()
        .map_or(1, |max| max.saturating_add(1))
}

/// Distinct registers a program reads or writes, in ascending order
pub fn referenced_registers(program: &Program) -> BTreeSet<Register> {
    program.iter().flat_map(|inst| inst.registers()).collect()
}
