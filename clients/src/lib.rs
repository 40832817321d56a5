//! Evaluation glue for the `numtower` binary.
//!
//! Parses decimal operands in a chosen domain, applies one tower operation,
//! and reports the result tagged with the level it landed in.

#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs, clippy::missing_errors_doc)]

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use clap::ValueEnum;
use numtower::{Difference, Integer, Natural, Operation, Quotient, Rational};

/// The level operands are parsed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Domain {
    /// ℕ: unsigned decimal literals.
    #[default]
    Natural,
    /// ℤ: optionally signed decimal literals.
    Integer,
}

/// An operator symbol accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `^`
    Power,
    /// `/`
    Divide,
    /// `%`, quotient and remainder
    DivideWithRemainder,
    /// `root`, with the degree on the left
    Root,
    /// `log`, with the base on the left
    Logarithm,
}

impl FromStr for Operator {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(match s {
            "+" => Self::Add,
            "-" => Self::Subtract,
            "*" | "x" => Self::Multiply,
            "^" => Self::Power,
            "/" => Self::Divide,
            "%" => Self::DivideWithRemainder,
            "root" => Self::Root,
            "log" => Self::Logarithm,
            other => bail!("unknown operator '{other}' (expected one of + - * ^ / % root log)"),
        })
    }
}

impl Operator {
    fn operation(self) -> Operation {
        match self {
            Self::Add => Operation::Add,
            Self::Subtract => Operation::Subtract,
            Self::Multiply => Operation::Multiply,
            Self::Power => Operation::Power,
            Self::Divide => Operation::Divide,
            Self::DivideWithRemainder => Operation::DivideWithRemainder,
            Self::Root => Operation::Root,
            Self::Logarithm => Operation::Logarithm,
        }
    }
}

/// A value tagged with the level of the tower it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// An element of ℕ.
    Natural(Natural),
    /// An element of ℤ.
    Integer(Integer),
    /// An element of ℚ.
    Rational(Rational),
}

impl From<Difference> for Value {
    fn from(d: Difference) -> Self {
        match d {
            Difference::Exact(n) => Self::Natural(n),
            Difference::Promoted(z) => Self::Integer(z),
        }
    }
}

impl<T: Into<Value>> From<Quotient<T>> for Value {
    fn from(q: Quotient<T>) -> Self {
        match q {
            Quotient::Exact(v) => v.into(),
            Quotient::Promoted(r) => Self::Rational(r),
        }
    }
}

impl From<Natural> for Value {
    fn from(n: Natural) -> Self {
        Self::Natural(n)
    }
}

impl From<Integer> for Value {
    fn from(z: Integer) -> Self {
        Self::Integer(z)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Natural(n) => write!(f, "ℕ {n}"),
            Self::Integer(z) => write!(f, "ℤ {z}"),
            Self::Rational(q) => write!(f, "ℚ {q}"),
        }
    }
}

/// What an evaluation produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A single result.
    Value(Value),
    /// A quotient and its remainder.
    WithRemainder(Value, Value),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => v.fmt(f),
            Self::WithRemainder(q, r) => {
                let remainder = match r {
                    Value::Natural(n) => n.to_string(),
                    Value::Integer(z) => z.to_string(),
                    Value::Rational(x) => x.to_string(),
                };
                write!(f, "{q} r {remainder}")
            }
        }
    }
}

/// Parses both operands in `domain` and applies `operator`.
///
/// # Errors
///
/// Returns an error for a malformed operand, for a question with no answer
/// in the tower, and for a result that would not fit the fixed-width
/// representation.
pub fn evaluate(domain: Domain, lhs: &str, operator: Operator, rhs: &str) -> Result<Outcome> {
    tracing::debug!(?domain, lhs, ?operator, rhs, "evaluating");
    match domain {
        Domain::Natural => {
            let a: Natural = lhs.parse().with_context(|| format!("invalid ℕ operand '{lhs}'"))?;
            let b: Natural = rhs.parse().with_context(|| format!("invalid ℕ operand '{rhs}'"))?;
            evaluate_natural(a, operator, b)
        }
        Domain::Integer => {
            let a: Integer = lhs.parse().with_context(|| format!("invalid ℤ operand '{lhs}'"))?;
            let b: Integer = rhs.parse().with_context(|| format!("invalid ℤ operand '{rhs}'"))?;
            evaluate_integer(a, operator, b)
        }
    }
}

/// Parses `literal` as a ℚ and returns its canonical form.
///
/// # Errors
///
/// Returns an error for a malformed literal or a zero denominator.
pub fn reduce(literal: &str) -> Result<Rational> {
    // Parsing already yields the canonical form
    literal
        .parse()
        .with_context(|| format!("invalid ℚ literal '{literal}'"))
}

fn overflowed(operator: Operator) -> anyhow::Error {
    anyhow!(
        "{} overflows the fixed-width representation",
        operator.operation()
    )
}

fn evaluate_natural(a: Natural, operator: Operator, b: Natural) -> Result<Outcome> {
    let value: Value = match operator {
        Operator::Add => a.checked_add(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Multiply => a.checked_multiply(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Power => a.checked_power(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Subtract => a.checked_subtract(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Divide => a.checked_divide(b).ok_or_else(|| overflowed(operator))??.into(),
        Operator::DivideWithRemainder => {
            let (q, r) = a.divide_with_remainder(b)?;
            return Ok(Outcome::WithRemainder(q.into(), r.into()));
        }
        Operator::Root => a.root(b)?.into(),
        Operator::Logarithm => a.logarithm(b)?.into(),
    };
    Ok(Outcome::Value(value))
}

fn evaluate_integer(a: Integer, operator: Operator, b: Integer) -> Result<Outcome> {
    let value: Value = match operator {
        Operator::Add => a.checked_add(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Subtract => a.checked_subtract(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Multiply => a.checked_multiply(b).ok_or_else(|| overflowed(operator))?.into(),
        Operator::Power => a.checked_power(b).ok_or_else(|| overflowed(operator))??.into(),
        Operator::Divide => a.checked_divide(b).ok_or_else(|| overflowed(operator))??.into(),
        Operator::DivideWithRemainder => {
            let (q, r) = a
                .checked_divide_with_remainder(b)
                .ok_or_else(|| overflowed(operator))??;
            return Ok(Outcome::WithRemainder(q.into(), r.into()));
        }
        Operator::Root => a.root(b)?.into(),
        Operator::Logarithm => a.logarithm(b)?.into(),
    };
    Ok(Outcome::Value(value))
}
