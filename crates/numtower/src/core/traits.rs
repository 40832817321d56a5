//! Operation sets of the three number systems.
//!
//! [`Successor`] is the single primitive of the tower. Every ℕ operation is
//! defined in terms of it; [`crate::axioms`] spells those definitions out
//! generically over any `Successor` type.
//!
//! The operation traits describe what each number system answers. The
//! concrete types override every operation with a closed form, the way a
//! backend overrides a derived op with a native instruction, and the
//! compile-time checks at the bottom of this file pin each type to its set.

use super::error::ArithmeticError;
use super::promotion::{Difference, Quotient};
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

/// The primitive: "add one".
///
/// `Ord` must agree with successor order: `x < x.successor()` for every `x`.
pub trait Successor: Copy + Ord {
    /// The element nothing precedes.
    const ZERO: Self;

    /// Returns the next element.
    fn successor(self) -> Self;
}

/// Operations answered by ℕ.
///
/// Partial operations either promote ([`Difference`], [`Quotient`]) or
/// return an [`ArithmeticError`].
pub trait NaturalOperations: Successor {
    /// `a + b`.
    fn add(self, rhs: Self) -> Self;

    /// `a * b`.
    fn multiply(self, rhs: Self) -> Self;

    /// `a ^ b`, with `0 ^ 0 = 1`.
    fn power(self, rhs: Self) -> Self;

    /// `a - b`, promoted to ℤ when `a < b`.
    fn subtract(self, rhs: Self) -> Difference;

    /// `a / b`, promoted to ℚ when inexact.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError>;

    /// Euclidean division `a = q * b + r`, `0 <= r < b`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError>;

    /// The `self`-th root of `x`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::InvalidDegree`] or [`ArithmeticError::NoSolution`].
    fn root(self, x: Self) -> Result<Self, ArithmeticError>;

    /// The logarithm of `x` in base `self`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::UndefinedForZero`], [`ArithmeticError::InvalidBase`]
    /// or [`ArithmeticError::NoSolution`].
    fn logarithm(self, x: Self) -> Result<Self, ArithmeticError>;
}

/// Operations answered by ℤ.
pub trait IntegerOperations: Copy + Ord {
    /// `a + b`.
    fn add(self, rhs: Self) -> Self;

    /// `a * b`.
    fn multiply(self, rhs: Self) -> Self;

    /// `a - b`; total in ℤ.
    fn subtract(self, rhs: Self) -> Self;

    /// `a ^ b`, promoted to ℚ for negative exponents when inexact.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] for a negative power of zero.
    fn power(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError>;

    /// `a / b`, promoted to ℚ when inexact.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError>;

    /// Truncating division; the remainder takes the dividend's sign.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError>;

    /// Not defined in ℤ.
    ///
    /// # Errors
    ///
    /// Always [`ArithmeticError::Unimplemented`].
    fn root(self, x: Self) -> Result<Self, ArithmeticError>;

    /// Not defined in ℤ.
    ///
    /// # Errors
    ///
    /// Always [`ArithmeticError::Unimplemented`].
    fn logarithm(self, x: Self) -> Result<Self, ArithmeticError>;
}

/// Operations answered by ℚ, the closure point of the tower.
pub trait RationalOperations: Copy + Eq {
    /// Canonical (lowest terms, positive denominator) form.
    fn reduce(self) -> Self;

    /// Returns `true` if the stored pair is already canonical.
    fn is_canonical(&self) -> bool;
}

impl Successor for Natural {
    const ZERO: Self = Natural::ZERO;

    #[inline]
    fn successor(self) -> Self {
        Natural::successor(self)
    }
}

impl NaturalOperations for Natural {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Natural::add(self, rhs)
    }

    #[inline]
    fn multiply(self, rhs: Self) -> Self {
        Natural::multiply(self, rhs)
    }

    #[inline]
    fn power(self, rhs: Self) -> Self {
        Natural::power(self, rhs)
    }

    #[inline]
    fn subtract(self, rhs: Self) -> Difference {
        Natural::subtract(self, rhs)
    }

    #[inline]
    fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        Natural::divide(self, rhs)
    }

    #[inline]
    fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
        Natural::divide_with_remainder(self, rhs)
    }

    #[inline]
    fn root(self, x: Self) -> Result<Self, ArithmeticError> {
        Natural::root(self, x)
    }

    #[inline]
    fn logarithm(self, x: Self) -> Result<Self, ArithmeticError> {
        Natural::logarithm(self, x)
    }
}

impl IntegerOperations for Integer {
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Integer::add(self, rhs)
    }

    #[inline]
    fn multiply(self, rhs: Self) -> Self {
        Integer::multiply(self, rhs)
    }

    #[inline]
    fn subtract(self, rhs: Self) -> Self {
        Integer::subtract(self, rhs)
    }

    #[inline]
    fn power(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        Integer::power(self, rhs)
    }

    #[inline]
    fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        Integer::divide(self, rhs)
    }

    #[inline]
    fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
        Integer::divide_with_remainder(self, rhs)
    }

    #[inline]
    fn root(self, x: Self) -> Result<Self, ArithmeticError> {
        Integer::root(self, x)
    }

    #[inline]
    fn logarithm(self, x: Self) -> Result<Self, ArithmeticError> {
        Integer::logarithm(self, x)
    }
}

impl RationalOperations for Rational {
    #[inline]
    fn reduce(self) -> Self {
        Rational::reduce(self)
    }

    #[inline]
    fn is_canonical(&self) -> bool {
        Rational::is_canonical(self)
    }
}

// Compile-time verification: each type satisfies its operation set
const _: () = {
    const fn assert_natural<T: NaturalOperations>() {}
    const fn assert_integer<T: IntegerOperations>() {}
    const fn assert_rational<T: RationalOperations>() {}
    assert_natural::<Natural>();
    assert_integer::<Integer>();
    assert_rational::<Rational>();
};

// Compile-time verification: values are shareable across threads
const _: () = {
    const fn assert_shareable<T: Send + Sync + Copy>() {}
    assert_shareable::<Natural>();
    assert_shareable::<Integer>();
    assert_shareable::<Rational>();
    assert_shareable::<Difference>();
    assert_shareable::<Quotient<Integer>>();
};
