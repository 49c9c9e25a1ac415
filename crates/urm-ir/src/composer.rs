//! Program combinators: superposition, primitive recursion and minimization.
//!
//! Each combinator lays out a private workspace for every subprogram,
//! relocates the subprogram bodies into it and joins them with glue
//! instructions. A subprogram's workspace is zeroed (apart from its argument
//! registers) right before each run, so embedded programs may be run
//! repeatedly and nested to any depth.

use crate::instruction::{Instruction, Register};
use crate::program::Program;
use crate::relocation::{checked_offset, Assembler};
use crate::validation::validate_program;
use tracing::debug;
use urm_core::{ComposeConfig, Error, Result};

pub struct Composer {
    config: ComposeConfig,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(ComposeConfig::default())
    }
}

impl Composer {
    pub fn new(config: ComposeConfig) -> Self {
        Self { config }
    }

    fn check(&self, program: &Program) -> Result<()> {
        if self.config.validate_inputs {
            validate_program(program)?;
        }
        Ok(())
    }

    /// Build `h(x_1..x_k) = F(G_1(x_1..x_k), ..., G_n(x_1..x_k))`.
    ///
    /// `outer` reads its `n` arguments from registers `1..=n`; each inner
    /// program reads `k` arguments from `1..=k`.
    pub fn superposition(
        &self,
        outer_arity: usize,
        inner_arity: usize,
        outer: &Program,
        inner: &[Program],
    ) -> Result<Program> {
        if inner.len() != outer_arity {
            return Err(Error::ArityMismatch {
                expected: outer_arity,
                found: inner.len(),
            });
        }
        self.check(outer)?;
        for program in inner {
            self.check(program)?;
        }

        // The outer region also covers the shared arguments 1..=k, which must
        // survive until the last inner program has copied them.
        let inner_args = checked_offset(inner_arity, 1)?;
        let mut offset = outer
            .required_memory()
            .max(checked_offset(outer_arity, 1)?)
            .max(inner_args);

        let mut asm = Assembler::new();
        let mut results = Vec::with_capacity(outer_arity);

        for (i, program) in inner.iter().enumerate() {
            let size = program.required_memory().max(inner_args);
            asm.clear_workspace(offset, program, inner_arity)?;
            asm.copy_arguments(offset, inner_arity)?;
            asm.embed(program, offset)?;
            results.push(Instruction::transfer(offset, i + 1));
            offset = checked_offset(offset, size)?;
        }

        // Only once every inner program has finished.
        asm.emit_all(results);
        asm.clear_workspace(0, outer, outer_arity)?;
        asm.embed(outer, 0)?;

        let program = asm.finish();
        debug!(
            outer_arity,
            inner_arity,
            registers = offset,
            statements = program.len(),
            "built superposition"
        );
        Ok(program)
    }

    /// Build `h(x, 0) = F(x)`, `h(x, y + 1) = G(x, y, h(x, y))` where `x` has
    /// `base_arity` components.
    ///
    /// Register layout: `x` in `1..=n`, `y` in `n+1`, the iteration index in
    /// `n+2` and the shared workspace of `F` and `G` from `n+3`. The
    /// workspace's output register holds the running result.
    pub fn primitive_recursion(
        &self,
        base_arity: usize,
        base: &Program,
        step: &Program,
    ) -> Result<Program> {
        self.check(base)?;
        self.check(step)?;

        let output = Register::OUTPUT.index();
        let n = base_arity;
        let limit = checked_offset(n, 1)?;
        let index = checked_offset(n, 2)?;
        let workspace = checked_offset(n, 3)?;
        let size = base
            .required_memory()
            .max(step.required_memory())
            .max(workspace);
        let registers = checked_offset(workspace, size)?;

        let mut asm = Assembler::new();
        asm.emit(Instruction::zero(index));
        asm.clear_workspace(workspace, base, n)?;
        asm.copy_arguments(workspace, n)?;
        asm.embed(base, workspace)?;

        let loop_start = asm.next_statement();
        asm.emit(Instruction::transfer(workspace, output));
        asm.emit(Instruction::jump_halt(limit, index));
        asm.copy_arguments(workspace, n)?;
        asm.emit(Instruction::transfer(index, workspace + limit));
        asm.emit(Instruction::transfer(workspace, workspace + index));
        asm.clear_workspace(workspace, step, index)?;
        asm.embed(step, workspace)?;
        asm.emit(Instruction::successor(index));
        asm.emit(Instruction::goto(loop_start));

        let program = asm.finish();
        debug!(
            base_arity,
            registers,
            statements = program.len(),
            "built primitive recursion"
        );
        Ok(program)
    }

    /// Build `h(x_1..x_{n-1}) = min { y : F(x_1..x_{n-1}, y) = 0 }`.
    ///
    /// The produced program runs forever when no such `y` exists.
    pub fn minimization(&self, arity: usize, program: &Program) -> Result<Program> {
        if arity == 0 {
            return Err(Error::InvalidArity(
                "function with zero arguments cannot be minimized".to_string(),
            ));
        }
        self.check(program)?;

        let output = Register::OUTPUT.index();
        let search = arity;
        let workspace = checked_offset(arity, 1)?;
        let size = program.required_memory().max(workspace);
        let registers = checked_offset(workspace, size)?;

        let mut asm = Assembler::new();
        // The output register stays zero until the answer is written and
        // serves as the reference for the output test.
        asm.emit(Instruction::zero(output));
        asm.emit(Instruction::zero(search));

        let loop_start = asm.next_statement();
        asm.clear_workspace(workspace, program, arity)?;
        asm.copy_arguments(workspace, arity)?;
        asm.embed(program, workspace)?;

        let exit = asm.next_statement() + 3;
        asm.emit(Instruction::jump(workspace, output, exit));
        asm.emit(Instruction::successor(search));
        asm.emit(Instruction::goto(loop_start));
        asm.emit(Instruction::transfer(search, output));

        let composed = asm.finish();
        debug!(
            arity,
            registers,
            statements = composed.len(),
            "built minimization"
        );
        Ok(composed)
    }
}

/// [`Composer::superposition`] with the default configuration
pub fn superposition(
    outer_arity: usize,
    inner_arity: usize,
    outer: &Program,
    inner: &[Program],
) -> Result<Program> {
    Composer::default().superposition(outer_arity, inner_arity, outer, inner)
}

/// [`Composer::primitive_recursion`] with the default configuration
pub fn primitive_recursion(base_arity: usize, base: &Program, step: &Program) -> Result<Program> {
    Composer::default().primitive_recursion(base_arity, base, step)
}

/// [`Composer::minimization`] with the default configuration
pub fn minimization(arity: usize, program: &Program) -> Result<Program> {
    Composer::default().minimization(arity, program)
}
