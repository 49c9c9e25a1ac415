//! Instruction set of the Unlimited Register Machine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Register identifier (index into the register file)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Register(pub usize);

impl Register {
    /// The designated output register
    pub const OUTPUT: Register = Register(0);

    pub fn index(&self) -> usize {
        self.0
    }

    /// Shift this register by a memory offset, or `None` on overflow
    pub fn checked_offset(self, by: usize) -> Option<Register> {
        self.0.checked_add(by).map(Register)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Destination of a jump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpTarget {
    /// 1-based statement index; `len + 1` falls off the end of the program
    Statement(usize),
    /// Stop the program this jump belongs to
    Halt,
}

impl fmt::Display for JumpTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JumpTarget::Statement(t) => write!(f, "{}", t),
            JumpTarget::Halt => write!(f, "0"),
        }
    }
}

/// A single URM instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Set the register to 0
    Zero(Register),
    /// Increment the register by 1
    Successor(Register),
    /// Copy `src` into `dst`
    Transfer { src: Register, dst: Register },
    /// Continue at `target` if `a` and `b` hold equal values
    Jump {
        a: Register,
        b: Register,
        target: JumpTarget,
    },
}

impl Instruction {
    pub fn zero(reg: usize) -> Self {
        Instruction::Zero(Register(reg))
    }

    pub fn successor(reg: usize) -> Self {
        Instruction::Successor(Register(reg))
    }

    pub fn transfer(src: usize, dst: usize) -> Self {
        Instruction::Transfer {
            src: Register(src),
            dst: Register(dst),
        }
    }

    /// Create a conditional jump to a 1-based statement
    pub fn jump(a: usize, b: usize, statement: usize) -> Self {
        Instruction::Jump {
            a: Register(a),
            b: Register(b),
            target: JumpTarget::Statement(statement),
        }
    }

    /// Create a conditional jump that stops the program
    pub fn jump_halt(a: usize, b: usize) -> Self {
        Instruction::Jump {
            a: Register(a),
            b: Register(b),
            target: JumpTarget::Halt,
        }
    }

    /// Create an unconditional jump (register 0 always equals itself)
    pub fn goto(statement: usize) -> Self {
        Self::jump(0, 0, statement)
    }

    pub fn is_control_flow(&self) -> bool {
        matches!(self, Instruction::Jump { .. })
    }

    pub fn target(&self) -> Option<JumpTarget> {
        match self {
            Instruction::Jump { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// Registers this instruction reads or writes.
    ///
    /// A jump's target is a statement, not a register, and is not included.
    pub fn registers(&self) -> impl Iterator<Item = Register> {
        let (first, second) = match *self {
            Instruction::Zero(r) | Instruction::Successor(r) => (r, None),
            Instruction::Transfer { src, dst } => (src, Some(dst)),
            Instruction::Jump { a, b, .. } => (a, Some(b)),
        };
        std::iter::once(first).chain(second)
    }

    /// Highest register index this instruction reads or writes
    pub fn max_register(&self) -> Register {
        self.registers().max().unwrap_or(Register::OUTPUT)
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Zero(r) => write!(f, "Z({})", r),
            Instruction::Successor(r) => write!(f, "S({})", r),
            Instruction::Transfer { src, dst } => write!(f, "T({},{})", src, dst),
            Instruction::Jump { a, b, target } => write!(f, "J({},{},{})", a, b, target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_builders() {
        assert_eq!(Instruction::zero(3), Instruction::Zero(Register(3)));
        assert_eq!(Instruction::successor(1), Instruction::Successor(Register(1)));
        assert_eq!(
            Instruction::transfer(1, 2),
            Instruction::Transfer {
                src: Register(1),
                dst: Register(2)
            }
        );

        let inst = Instruction::jump_halt(4, 5);
        assert!(inst.is_control_flow());
        assert_eq!(inst.target(), Some(JumpTarget::Halt));

        let inst = Instruction::goto(7);
        assert_eq!(inst.target(), Some(JumpTarget::Statement(7)));
        assert!(!Instruction::zero(0).is_control_flow());
    }

    #[test]
    fn test_max_register_ignores_jump_target() {
        assert_eq!(Instruction::zero(6).max_register(), Register(6));
        assert_eq!(Instruction::transfer(9, 2).max_register(), Register(9));
        assert_eq!(Instruction::jump(1, 2, 100).max_register(), Register(2));
    }

    #[test]
    fn test_registers() {
        let regs: Vec<_> = Instruction::jump(4, 1, 9).registers().collect();
        assert_eq!(regs, vec![Register(4), Register(1)]);

        let regs: Vec<_> = Instruction::successor(3).registers().collect();
        assert_eq!(regs, vec![Register(3)]);
    }

    #[test]
    fn test_checked_offset() {
        assert_eq!(Register(2).checked_offset(5), Some(Register(7)));
        assert_eq!(Register(usize::MAX).checked_offset(1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Instruction::zero(1).to_string(), "Z(1)");
        assert_eq!(Instruction::successor(0).to_string(), "S(0)");
        assert_eq!(Instruction::transfer(2, 0).to_string(), "T(2,0)");
        assert_eq!(Instruction::jump(1, 2, 5).to_string(), "J(1,2,5)");
        assert_eq!(Instruction::jump_halt(1, 2).to_string(), "J(1,2,0)");
    }
}
