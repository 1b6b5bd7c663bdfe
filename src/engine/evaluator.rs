// ============================================================================
// Evaluator
// Parses textual operands and dispatches to the numeric functions
// ============================================================================

use super::errors::{CalcError, CalcResult};
use super::operation::Operation;
use crate::input::{parse_float, parse_integer};
use crate::numeric;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a dispatched operation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Integer(i64),
    Float(f64),
    /// Sine, cosine and tangent of one angle
    Trig { sin: f64, cos: f64, tan: f64 },
}

impl Value {
    /// Integer payload, if this is an integer result.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Float payload, if this is a float result.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Trig { sin, cos, tan } => write!(f, "sin={}, cos={}, tan={}", sin, cos, tan),
        }
    }
}

fn arity_mismatch(op: Operation, args: &[&str]) -> CalcError {
    CalcError::ArityMismatch {
        operation: op,
        expected: op.arity(),
        got: args.len(),
    }
}

/// Parse the integer operand at `position`
fn integer_at(op: Operation, args: &[&str], position: usize) -> CalcResult<i64> {
    let text = args.get(position).ok_or_else(|| arity_mismatch(op, args))?;
    parse_integer(text).map_err(|source| CalcError::Parse { position, source })
}

/// Parse the float operand at `position`
fn float_at(op: Operation, args: &[&str], position: usize) -> CalcResult<f64> {
    let text = args.get(position).ok_or_else(|| arity_mismatch(op, args))?;
    parse_float(text).map_err(|source| CalcError::Parse { position, source })
}

/// Evaluate `op` on textual operands.
///
/// Operands are parsed with [`parse_integer`] or [`parse_float`] according
/// to [`Operation::operand_kind`]. Integer divisions by zero, which the
/// numeric functions leave to the caller, are reported as
/// `IntegerDivisionByZero` instead of panicking.
///
/// # Example
/// ```
/// use calc_core::engine::{evaluate, Operation, Value};
///
/// assert_eq!(evaluate(Operation::Gcd, &["36", "24"]), Ok(Value::Integer(12)));
/// assert!(evaluate(Operation::SquareRoot, &["-4"]).is_err());
/// ```
pub fn evaluate(op: Operation, args: &[&str]) -> CalcResult<Value> {
    let result = evaluate_inner(op, args);

    match &result {
        Ok(value) => tracing::trace!(operation = %op, %value, "evaluated"),
        Err(err) => tracing::debug!(operation = %op, error = %err, "evaluation failed"),
    }

    result
}

fn evaluate_inner(op: Operation, args: &[&str]) -> CalcResult<Value> {
    if args.len() != op.arity() {
        return Err(arity_mismatch(op, args));
    }

    let int = |position| integer_at(op, args, position);
    let float = |position| float_at(op, args, position);

    let value = match op {
        Operation::Add => Value::Integer(numeric::add(int(0)?, int(1)?)),
        Operation::Subtract => Value::Integer(numeric::subtract(int(0)?, int(1)?)),
        Operation::Modulo => {
            let (a, b) = (int(0)?, int(1)?);
            if b == 0 {
                return Err(CalcError::IntegerDivisionByZero { operation: op });
            }
            Value::Integer(numeric::modulo(a, b))
        },
        Operation::Factorial => Value::Integer(numeric::factorial(int(0)?)?),
        Operation::Gcd => Value::Integer(numeric::gcd(int(0)?, int(1)?)),
        Operation::Lcm => {
            let (a, b) = (int(0)?, int(1)?);
            if a == 0 && b == 0 {
                return Err(CalcError::IntegerDivisionByZero { operation: op });
            }
            Value::Integer(numeric::lcm(a, b))
        },
        Operation::Multiply => Value::Float(numeric::multiply(float(0)?, float(1)?)),
        Operation::Divide => Value::Float(numeric::divide(float(0)?, float(1)?)?),
        Operation::Power => Value::Float(numeric::power(float(0)?, float(1)?)),
        Operation::Absolute => Value::Float(numeric::absolute(float(0)?)),
        Operation::SquareRoot => Value::Float(numeric::square_root(float(0)?)?),
        Operation::Logarithm => Value::Float(numeric::logarithm(float(0)?, float(1)?)?),
        Operation::SinCosTan => {
            let (sin, cos, tan) = numeric::sin_cos_tan(float(0)?);
            Value::Trig { sin, cos, tan }
        },
    };
    Ok(value)
}

/// Resolve an operation by name, then [`evaluate`] it.
///
/// # Example
/// ```
/// use calc_core::engine::{evaluate_named, Value};
///
/// assert_eq!(evaluate_named("pow", &["2", "10"]), Ok(Value::Float(1024.0)));
/// ```
pub fn evaluate_named(name: &str, args: &[&str]) -> CalcResult<Value> {
    let op: Operation = name.parse()?;
    evaluate(op, args)
}
