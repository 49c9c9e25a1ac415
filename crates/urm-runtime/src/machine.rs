//! Fuel-bounded interpreter for URM programs.

use tracing::{debug, trace};
use urm_core::{Error, ExecutionConfig, Result};
use urm_ir::{validate_program, Instruction, JumpTarget, Program, Register};

/// Result of a finished run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Final value of register 0
    pub output: u64,
    /// Number of statements executed
    pub steps: u64,
    /// Final register file
    pub registers: Vec<u64>,
}

pub struct Machine {
    config: ExecutionConfig,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(ExecutionConfig::default())
    }
}

impl Machine {
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Run `program` with `inputs` loaded into registers `1..=inputs.len()`.
    pub fn run(&self, program: &Program, inputs: &[u64]) -> Result<Outcome> {
        validate_program(program)?;

        let size = program
            .required_memory()
            .max(inputs.len() + 1)
            .max(self.config.min_registers);
        let mut registers = vec![0u64; size];
        registers[1..=inputs.len()].copy_from_slice(inputs);

        let mut pc = 1;
        let mut steps = 0u64;

        while let Some(inst) = program.statement(pc) {
            if steps >= self.config.max_steps {
                debug!(steps, pc, "out of fuel");
                return Err(Error::ResourceExhausted(format!(
                    "step limit of {} reached at statement {}",
                    self.config.max_steps, pc
                )));
            }
            steps += 1;
            trace!(pc, %inst, "step");

            pc = match *inst {
                Instruction::Zero(r) => {
                    registers[r.index()] = 0;
                    pc + 1
                }
                Instruction::Successor(r) => {
                    let cell = &mut registers[r.index()];
                    *cell = cell.checked_add(1).ok_or_else(|| {
                        Error::Execution(format!("register {} overflowed at statement {}", r, pc))
                    })?;
                    pc + 1
                }
                Instruction::Transfer { src, dst } => {
                    registers[dst.index()] = registers[src.index()];
                    pc + 1
                }
                Instruction::Jump { a, b, target } => {
                    if registers[a.index()] != registers[b.index()] {
                        pc + 1
                    } else {
                        match target {
                            JumpTarget::Statement(t) => t,
                            JumpTarget::Halt => break,
                        }
                    }
                }
            };
        }

        let output = registers[Register::OUTPUT.index()];
        debug!(steps, output, "program halted");
        Ok(Outcome {
            output,
            steps,
            registers,
        })
    }
}
