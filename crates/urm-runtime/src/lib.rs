//! Reference interpreter for URM programs.
//!
//! Executes a finished [`Program`] against a zero-initialised register file
//! with a bounded number of steps.

pub mod machine;

pub use machine::{Machine, Outcome};

use urm_core::Result;
use urm_ir::Program;

/// Run `program` with the default execution limits and return register 0
pub fn run(program: &Program, inputs: &[u64]) -> Result<u64> {
    Ok(Machine::default().run(program, inputs)?.output)
}
