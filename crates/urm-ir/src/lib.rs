//! Program model and combinators for the Unlimited Register Machine.
//!
//! A URM program is a flat list of statements addressed by 1-based position.
//! This crate provides:
//! - The instruction set and program representation
//! - The register footprint of a program
//! - Relocation of subprograms into a larger program
//! - Superposition, primitive recursion and minimization combinators

pub mod composer;
pub mod instruction;
pub mod memory;
pub mod program;
pub mod relocation;
pub mod validation;

pub use composer::{minimization, primitive_recursion, superposition, Composer};
pub use instruction::{Instruction, JumpTarget, Register};
pub use memory::{referenced_registers, required_memory};
pub use program::Program;
pub use relocation::{relocate, Assembler, Placement};
pub use validation::{validate_program, MAX_REGISTER};
