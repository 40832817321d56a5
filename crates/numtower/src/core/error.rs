//! Error kinds for the number tower.
//!
//! Every error here is an *expected* answer to a well-formed query: the
//! question asked has no solution in the number system it was asked in.
//! Callers probe for exactness as normal control flow, so none of these
//! abort the process.
//!
//! Promotion is not an error. A subtraction that underflows ℕ or a division
//! that is inexact succeeds with a value of a richer type; see
//! [`crate::promotion`].

use core::fmt;

use thiserror::Error;

/// Names an operation of the tower, for error messages and overflow faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `n + 1`.
    Successor,
    /// `a + b`.
    Add,
    /// `a * b`.
    Multiply,
    /// `a ^ b`.
    Power,
    /// `a - b`.
    Subtract,
    /// `a / b`.
    Divide,
    /// Euclidean division `a = q * b + r`.
    DivideWithRemainder,
    /// `k√x`.
    Root,
    /// `log_b(x)`.
    Logarithm,
    /// Additive inverse in ℤ.
    Negate,
    /// Canonicalization of a ℚ value.
    Reduce,
    /// Carrying a value into a richer number system.
    Promote,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Successor => "successor",
            Self::Add => "addition",
            Self::Multiply => "multiplication",
            Self::Power => "power",
            Self::Subtract => "subtraction",
            Self::Divide => "division",
            Self::DivideWithRemainder => "division with remainder",
            Self::Root => "root",
            Self::Logarithm => "logarithm",
            Self::Negate => "negation",
            Self::Reduce => "reduction",
            Self::Promote => "promotion",
        };
        f.write_str(name)
    }
}

/// A query against the tower that has no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Division (or a negative power of zero) by zero.
    #[error("can't divide by zero")]
    DivideByZero,

    /// A root or logarithm search overshot its target without an exact hit.
    #[error("{operation} has no solution in ℕ")]
    NoSolution {
        /// The operation whose search was exhausted.
        operation: Operation,
    },

    /// A zeroth root was requested.
    #[error("can't take zeroth root")]
    InvalidDegree,

    /// A logarithm with base zero or one was requested.
    #[error("can't take logarithm with base zero or one")]
    InvalidBase,

    /// The logarithm of zero was requested.
    #[error("can't take logarithm of zero")]
    UndefinedForZero,

    /// The operation is not defined at this level of the tower.
    #[error("{operation} is not defined in ℤ")]
    Unimplemented {
        /// The undefined operation.
        operation: Operation,
    },
}

/// A decimal literal that does not denote a value of the target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseError {
    /// The literal (or one side of a `n/d` literal) is empty.
    #[error("empty literal")]
    Empty,

    /// A character that is not a decimal digit.
    #[error("invalid character '{character}' at position {position}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Character position within the whole literal.
        position: usize,
    },

    /// The value does not fit the fixed-width representation.
    #[error("literal out of range")]
    Overflow,

    /// A rational literal without the `/` separator.
    #[error("expected a rational literal of the form <int>/<int>")]
    MissingSeparator,

    /// A rational literal with a zero denominator.
    #[error("rational literal has a zero denominator")]
    ZeroDenominator,
}

/// Fault raised when a total operation leaves the fixed-width range.
///
/// Overflow is a precondition violation, like a zero ℚ denominator, not a
/// query result.
#[cold]
#[track_caller]
pub(crate) fn overflow(operation: Operation) -> ! {
    panic!("{operation} overflows the fixed-width representation")
}
