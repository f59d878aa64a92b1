//! Runtime value type for NaturalScript.
//!
//! Scripts only ever write integers and text.  A third tag, [`Value::Float`],
//! exists because `divide` performs real division and its result may be
//! non-integral.

use std::fmt;

use crate::error::RuntimeErrorKind;

/// A NaturalScript runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => {
                // Integral quotients keep a trailing `.0` so they read as reals.
                if x.fract() == 0.0 && x.abs() < 1e15 {
                    write!(f, "{:.1}", x)
                } else {
                    write!(f, "{x}")
                }
            }
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl Value {
    /// The integer payload, if this value carries the integer tag.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of the tag, used in debug logging.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "real",
            Value::Str(_) => "text",
        }
    }

    /// Parse an all-digit literal into an integer value.
    pub fn parse_int(digits: &str) -> Result<i64, RuntimeErrorKind> {
        digits
            .parse()
            .map_err(|_| RuntimeErrorKind::InvalidInteger(digits.to_owned()))
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────────

/// The four arithmetic verbs a statement can open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithOp {
    /// Map a lowercase verb to its operator.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb {
            "add" => Some(ArithOp::Add),
            "subtract" => Some(ArithOp::Subtract),
            "multiply" => Some(ArithOp::Multiply),
            "divide" => Some(ArithOp::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two integer operands.
    ///
    /// `+ - *` stay integral and fail on 64-bit overflow.  `/` always yields
    /// a [`Value::Float`], even when the quotient is whole.
    pub fn apply(self, a: i64, b: i64) -> Result<Value, RuntimeErrorKind> {
        let checked = match self {
            ArithOp::Add => a.checked_add(b),
            ArithOp::Subtract => a.checked_sub(b),
            ArithOp::Multiply => a.checked_mul(b),
            ArithOp::Divide => {
                if b == 0 {
                    return Err(RuntimeErrorKind::DivisionByZero);
                }
                return Ok(Value::Float(a as f64 / b as f64));
            }
        };
        checked.map(Value::Int).ok_or(RuntimeErrorKind::Overflow)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
