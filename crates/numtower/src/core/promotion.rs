//! Tagged results for operations that may leave their number system.
//!
//! When an operation has no exact answer in the type it was asked in, the
//! answer is re-derived one level up the tower and returned in the richer
//! type:
//!
//! | Operation | Exact branch | Promoted branch |
//! |-----------|--------------|-----------------|
//! | ℕ subtract | [`Natural`] | [`Integer`] (`a < b`) |
//! | ℕ divide | [`Natural`] | [`Rational`] (inexact) |
//! | ℤ divide, negative ℤ power | [`Integer`] | [`Rational`] (inexact) |
//!
//! Both enums are plain sum types, so the compiler forces callers to handle
//! the promoted branch.

use core::fmt;

use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

/// Result of [`Natural::subtract`]: `a - b` in ℕ, or in ℤ when `a < b`.
///
/// # Example
///
/// ```
/// use numtower::{Difference, Integer, Natural};
///
/// let d = Natural::new(42).subtract(Natural::new(43));
/// assert_eq!(d, Difference::Promoted(Integer::new(-1)));
/// assert_eq!(d.to_integer(), Integer::new(-1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difference {
    /// The difference exists in ℕ.
    Exact(Natural),
    /// The subtrahend exceeded the minuend; the difference lives in ℤ.
    Promoted(Integer),
}

impl Difference {
    /// Returns `true` if the difference stayed in ℕ.
    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Returns the ℕ difference, if there is one.
    #[inline]
    #[must_use]
    pub const fn exact(self) -> Option<Natural> {
        match self {
            Self::Exact(n) => Some(n),
            Self::Promoted(_) => None,
        }
    }

    /// Lifts either branch to ℤ.
    ///
    /// # Panics
    ///
    /// Panics if an exact difference exceeds `i64::MAX`.
    #[must_use]
    pub fn to_integer(self) -> Integer {
        match self {
            Self::Exact(n) => Integer::from_natural(n),
            Self::Promoted(z) => z,
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => fmt::Display::fmt(n, f),
            Self::Promoted(z) => fmt::Display::fmt(z, f),
        }
    }
}

/// Result of a division: exact in `T`, or promoted to a canonical ℚ.
///
/// The promoted value is always in lowest terms.
///
/// # Example
///
/// ```
/// use numtower::{Natural, Quotient, Rational};
///
/// let exact = Natural::new(140).divide(Natural::new(10)).unwrap();
/// assert_eq!(exact, Quotient::Exact(Natural::new(14)));
///
/// let promoted = Natural::new(140).divide(Natural::new(11)).unwrap();
/// assert_eq!(promoted, Quotient::Promoted(Rational::new(140, 11)));
/// assert_eq!(promoted.to_string(), "140/11");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quotient<T> {
    /// The division is exact in `T`.
    Exact(T),
    /// The division is inexact; the quotient lives in ℚ.
    Promoted(Rational),
}

impl<T> Quotient<T> {
    /// Returns `true` if the quotient stayed in `T`.
    #[inline]
    #[must_use]
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Returns the exact quotient, if there is one.
    #[inline]
    #[must_use]
    pub fn exact(self) -> Option<T> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Promoted(_) => None,
        }
    }

    /// Maps the exact branch, leaving a promoted ℚ untouched.
    #[inline]
    pub fn map_exact<U, F: FnOnce(T) -> U>(self, f: F) -> Quotient<U> {
        match self {
            Self::Exact(v) => Quotient::Exact(f(v)),
            Self::Promoted(q) => Quotient::Promoted(q),
        }
    }

    /// Lifts either branch to ℚ.
    #[must_use]
    pub fn to_rational(self) -> Rational
    where
        T: Into<Rational>,
    {
        match self {
            Self::Exact(v) => v.into(),
            Self::Promoted(q) => q,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Quotient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(v) => fmt::Display::fmt(v, f),
            Self::Promoted(q) => fmt::Display::fmt(q, f),
        }
    }
}
