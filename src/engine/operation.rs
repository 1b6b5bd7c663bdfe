// ============================================================================
// Operation Descriptor
// Names, arity and operand kinds for every numeric operation
// ============================================================================

use super::errors::CalcError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric type an operation expects for all of its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    /// Signed 64-bit integer
    Integer,
    /// IEEE-754 double
    Float,
}

/// One of the operations exposed by [`crate::numeric`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Absolute,
    SquareRoot,
    Factorial,
    Gcd,
    Lcm,
    Logarithm,
    SinCosTan,
}

impl Operation {
    /// Every operation, in declaration order
    pub const ALL: [Operation; 13] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Modulo,
        Operation::Power,
        Operation::Absolute,
        Operation::SquareRoot,
        Operation::Factorial,
        Operation::Gcd,
        Operation::Lcm,
        Operation::Logarithm,
        Operation::SinCosTan,
    ];

    /// Canonical lowercase name
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Modulo => "modulo",
            Operation::Power => "power",
            Operation::Absolute => "absolute",
            Operation::SquareRoot => "square_root",
            Operation::Factorial => "factorial",
            Operation::Gcd => "gcd",
            Operation::Lcm => "lcm",
            Operation::Logarithm => "logarithm",
            Operation::SinCosTan => "sin_cos_tan",
        }
    }

    /// Number of operands the operation takes
    pub const fn arity(self) -> usize {
        match self {
            Operation::Absolute
            | Operation::SquareRoot
            | Operation::Factorial
            | Operation::SinCosTan => 1,
            _ => 2,
        }
    }

    /// Numeric type of the operands
    pub const fn operand_kind(self) -> OperandKind {
        match self {
            Operation::Add
            | Operation::Subtract
            | Operation::Modulo
            | Operation::Factorial
            | Operation::Gcd
            | Operation::Lcm => OperandKind::Integer,
            Operation::Multiply
            | Operation::Divide
            | Operation::Power
            | Operation::Absolute
            | Operation::SquareRoot
            | Operation::Logarithm
            | Operation::SinCosTan => OperandKind::Float,
        }
    }

    /// Resolve a short alias or operator symbol
    fn from_alias(name: &str) -> Option<Self> {
        let op = match name {
            "+" | "plus" => Operation::Add,
            "-" | "sub" | "minus" => Operation::Subtract,
            "*" | "mul" | "times" => Operation::Multiply,
            "/" | "div" => Operation::Divide,
            "%" | "mod" | "rem" => Operation::Modulo,
            "^" | "pow" => Operation::Power,
            "abs" => Operation::Absolute,
            "sqrt" | "squareroot" => Operation::SquareRoot,
            "fact" | "!" => Operation::Factorial,
            "log" => Operation::Logarithm,
            "trig" | "sincostan" => Operation::SinCosTan,
            _ => return None,
        };
        Some(op)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Parse an operation name, case-insensitively.
    ///
    /// Accepts canonical names (`square_root`), aliases (`sqrt`) and the
    /// operator symbols `+ - * / % ^`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();

        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .or_else(|| Operation::from_alias(&name))
            .ok_or_else(|| CalcError::UnknownOperation(s.to_string()))
    }
}
