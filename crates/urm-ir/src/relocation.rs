//! Relocation of subprograms embedded inside a larger program.

use crate::instruction::{Instruction, JumpTarget, Register};
use crate::program::Program;
use urm_core::{Error, Result};

/// Where an embedded copy of a subprogram lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Placement {
    /// Added to every register index
    pub memory_offset: usize,
    /// Number of statements preceding the embedded copy
    pub statement_offset: usize,
}

impl Placement {
    pub fn new(memory_offset: usize, statement_offset: usize) -> Self {
        Self {
            memory_offset,
            statement_offset,
        }
    }
}

/// `base + by`, or `MalformedProgram` when the layout does not fit in `usize`
pub fn checked_offset(base: usize, by: usize) -> Result<usize> {
    base.checked_add(by).ok_or_else(|| {
        Error::MalformedProgram(format!("offset {} + {} overflows", base, by))
    })
}

fn shift(reg: Register, by: usize) -> Result<Register> {
    Ok(Register(checked_offset(reg.index(), by)?))
}

impl Instruction {
    /// Rewrite this instruction for a copy of a program of length `len`
    /// placed at `placement`.
    ///
    /// A `Halt` jump becomes a jump to the statement right after the copy.
    pub fn relocated(&self, placement: Placement, len: usize) -> Result<Instruction> {
        let m = placement.memory_offset;
        let s = placement.statement_offset;
        Ok(match *self {
            Instruction::Zero(r) => Instruction::Zero(shift(r, m)?),
            Instruction::Successor(r) => Instruction::Successor(shift(r, m)?),
            Instruction::Transfer { src, dst } => Instruction::Transfer {
                src: shift(src, m)?,
                dst: shift(dst, m)?,
            },
            Instruction::Jump { a, b, target } => Instruction::Jump {
                a: shift(a, m)?,
                b: shift(b, m)?,
                target: match target {
                    JumpTarget::Statement(t) => JumpTarget::Statement(checked_offset(t, s)?),
                    JumpTarget::Halt => {
                        JumpTarget::Statement(checked_offset(checked_offset(s, len)?, 1)?)
                    }
                },
            },
        })
    }
}

/// Relocate every statement of `program`
pub fn relocate(program: &Program, placement: Placement) -> Result<Vec<Instruction>> {
    let len = program.len();
    program
        .iter()
        .map(|inst| inst.relocated(placement, len))
        .collect()
}

/// Incrementally builds a composed program out of glue instructions and
/// relocated subprograms.
#[derive(Debug, Default)]
pub struct Assembler {
    instructions: Vec<Instruction>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// 1-based index of the next statement to be emitted
    pub fn next_statement(&self) -> usize {
        self.instructions.len() + 1
    }

    pub fn emit(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    pub fn emit_all<I: IntoIterator<Item = Instruction>>(&mut self, insts: I) {
        self.instructions.extend(insts);
    }

    /// Append a relocated copy of `program` whose registers start at
    /// `memory_offset`. Returns the placement used.
    pub fn embed(&mut self, program: &Program, memory_offset: usize) -> Result<Placement> {
        let placement = Placement::new(memory_offset, self.instructions.len());
        self.instructions.extend(relocate(program, placement)?);
        Ok(placement)
    }

    /// Zero the registers `program` will see in its workspace at `offset`:
    /// the output register and every referenced register outside the
    /// arguments `1..=arity`.
    pub fn clear_workspace(&mut self, offset: usize, program: &Program, arity: usize) -> Result<()> {
        let mut registers = program.registers();
        registers.insert(Register::OUTPUT);
        for reg in registers {
            if reg == Register::OUTPUT || reg.index() > arity {
                self.emit(Instruction::Zero(shift(reg, offset)?));
            }
        }
        Ok(())
    }

    /// Copy global registers `1..=count` into the argument registers of the
    /// workspace at `offset`
    pub fn copy_arguments(&mut self, offset: usize, count: usize) -> Result<()> {
        for i in 1..=count {
            self.emit(Instruction::transfer(i, checked_offset(offset, i)?));
        }
        Ok(())
    }

    pub fn finish(self) -> Program {
        Program::with_instructions(self.instructions)
    }
}
