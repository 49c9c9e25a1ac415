//! Validation for URM programs.

use crate::instruction::{Instruction, JumpTarget};
use crate::program::Program;
use urm_core::{Error, Result};

/// Highest register index a well-formed program may reference.
///
/// Keeps workspace offsets and relocated indices far from `usize::MAX`.
pub const MAX_REGISTER: usize = u32::MAX as usize;

/// Validate that every jump stays inside the program and every register is
/// at most [`MAX_REGISTER`].
///
/// Targets must be `Halt` or a statement in `1..=len + 1`; `len + 1` is the
/// implicit halt at the end of the program.
pub fn validate_program(program: &Program) -> Result<()> {
    let len = program.len();
    for (idx, inst) in program.iter().enumerate() {
        let reg = inst.max_register();
        if reg.index() > MAX_REGISTER {
            return Err(Error::MalformedProgram(format!(
                "statement {} references register {} above the limit of {}",
                idx + 1,
                reg,
                MAX_REGISTER
            )));
        }
        if let Instruction::Jump {
            target: JumpTarget::Statement(t),
            ..
        } = inst
        {
            if *t == 0 {
                return Err(Error::MalformedProgram(format!(
                    "statement {} jumps to statement 0; use Halt to stop",
                    idx + 1
                )));
            }
            if *t > len + 1 {
                return Err(Error::MalformedProgram(format!(
                    "statement {} jumps to {} outside a program of {} statements",
                    idx + 1,
                    t,
                    len
                )));
            }
        }
    }

    Ok(())
}
