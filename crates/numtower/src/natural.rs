//! ℕ - the natural numbers, including zero.
//!
//! The only thing ℕ knows initially is zero and how to add one. Everything
//! else is derived, each operation from the previous one:
//!
//! | Operation | Definition |
//! |-----------|------------|
//! | `a + b` | apply successor to `a`, `b` times |
//! | `a * b` | add `a` to zero, `b` times |
//! | `a ^ b` | multiply one by `a`, `b` times |
//! | `a - b` | the `x` with `b + x = a` |
//! | `a / b` | the `x` with `b * x = a` |
//! | `k√x` | the `b` with `b ^ k = x` |
//! | `log_b(x)` | the `e` with `b ^ e = x` |
//!
//! The methods here compute the same answers in closed form; the literal
//! successor derivations live in [`crate::axioms`] and are cross-checked
//! against these in the test suite.
//!
//! Rules that follow from the definitions:
//!
//! ```text
//! a + b = b + a            a * b = b * a
//! a + (b + c) = (a + b) + c
//! a * (b + c) = a * b + a * c
//! (a * b) ^ c = a ^ c * b ^ c
//! a ^ b * a ^ c = a ^ (b + c)
//! a + 0 = a    a * 1 = a    a ^ 1 = a
//! ```
//!
//! The magnitude is a `u64`. Leaving that range in a total operation
//! (`add`, `multiply`, `power`, `successor`) is a precondition violation and
//! panics; the `checked_*` variants return `None` instead.

use core::fmt;

use crate::core::error::{overflow, ArithmeticError, Operation};
use crate::core::promotion::{Difference, Quotient};
use crate::integer::Integer;
use crate::rational::Rational;

/// A natural number.
///
/// # Example
///
/// ```
/// use numtower::Natural;
///
/// let two = Natural::ZERO.successor().successor();
/// assert_eq!(two, Natural::new(2));
/// assert_eq!(Natural::new(2).power(Natural::new(16)), Natural::new(65536));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Natural(u64);

impl Natural {
    /// Zero, the identity of addition.
    pub const ZERO: Self = Self(0);

    /// One, the successor of zero and the identity of multiplication.
    pub const ONE: Self = Self(1);

    /// The largest representable natural.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a natural from its magnitude.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the magnitude.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns `true` for zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// The primitive: `n + 1`.
    ///
    /// # Panics
    ///
    /// Panics at [`Natural::MAX`].
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn successor(self) -> Self {
        match self.0.checked_add(1) {
            Some(v) => Self(v),
            None => overflow(Operation::Successor),
        }
    }

    /// The `p` with `p.successor() == self`, or `None` at zero.
    #[inline]
    #[must_use]
    pub const fn predecessor(self) -> Option<Self> {
        match self.0.checked_sub(1) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `a + b`, or `None` past [`Natural::MAX`].
    #[inline]
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `a * b`, or `None` past [`Natural::MAX`].
    #[inline]
    #[must_use]
    pub const fn checked_multiply(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `a ^ b`, or `None` past [`Natural::MAX`].
    ///
    /// `0 ^ 0 = 1`, as multiplying one by nothing leaves one.
    #[must_use]
    pub fn checked_power(self, rhs: Self) -> Option<Self> {
        match (self.0, rhs.0) {
            (_, 0) => Some(Self::ONE),
            (0, _) => Some(Self::ZERO),
            (1, _) => Some(Self::ONE),
            (base, exp) => u32::try_from(exp)
                .ok()
                .and_then(|e| base.checked_pow(e))
                .map(Self),
        }
    }

    /// Addition: `b` successors of `a`.
    ///
    /// # Panics
    ///
    /// Panics past [`Natural::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Natural;
    ///
    /// assert_eq!(Natural::new(42).add(Natural::new(18)), Natural::new(60));
    /// ```
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn add(self, rhs: Self) -> Self {
        match self.checked_add(rhs) {
            Some(v) => v,
            None => overflow(Operation::Add),
        }
    }

    /// Multiplication: `a` added to zero, `b` times.
    ///
    /// # Panics
    ///
    /// Panics past [`Natural::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Natural;
    ///
    /// assert_eq!(Natural::new(56).multiply(Natural::new(121)), Natural::new(6776));
    /// assert_eq!(Natural::ZERO.multiply(Natural::new(3)), Natural::ZERO);
    /// ```
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn multiply(self, rhs: Self) -> Self {
        match self.checked_multiply(rhs) {
            Some(v) => v,
            None => overflow(Operation::Multiply),
        }
    }

    /// Raising to a power: one multiplied by `a`, `b` times.
    ///
    /// # Panics
    ///
    /// Panics past [`Natural::MAX`].
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Natural;
    ///
    /// assert_eq!(Natural::ZERO.power(Natural::ZERO), Natural::ONE);
    /// assert_eq!(Natural::new(10).power(Natural::new(6)), Natural::new(1_000_000));
    /// ```
    #[inline]
    #[must_use]
    #[track_caller]
    pub fn power(self, rhs: Self) -> Self {
        match self.checked_power(rhs) {
            Some(v) => v,
            None => overflow(Operation::Power),
        }
    }

    /// Subtraction: the `x` with `b + x = a`.
    ///
    /// When `a < b` no such `x` exists in ℕ and the difference is re-derived
    /// in ℤ, the closure of ℕ under subtraction.
    ///
    /// # Panics
    ///
    /// Panics if `b - a` exceeds `2^63`, the largest magnitude of a negative
    /// `i64`. [`checked_subtract`](Self::checked_subtract) returns `None`
    /// instead.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Difference, Integer, Natural};
    ///
    /// assert_eq!(
    ///     Natural::new(145).subtract(Natural::new(22)),
    ///     Difference::Exact(Natural::new(123))
    /// );
    /// assert_eq!(
    ///     Natural::new(6).subtract(Natural::new(1211)),
    ///     Difference::Promoted(Integer::new(-1205))
    /// );
    /// ```
    #[must_use]
    #[track_caller]
    pub fn subtract(self, rhs: Self) -> Difference {
        match self.checked_subtract(rhs) {
            Some(d) => d,
            None => overflow(Operation::Subtract),
        }
    }

    /// [`subtract`](Self::subtract), or `None` when the promoted difference
    /// does not fit in ℤ.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Difference, Integer, Natural};
    ///
    /// assert_eq!(
    ///     Natural::new(6).checked_subtract(Natural::new(1211)),
    ///     Some(Difference::Promoted(Integer::new(-1205)))
    /// );
    /// assert_eq!(Natural::ZERO.checked_subtract(Natural::MAX), None);
    /// ```
    #[must_use]
    pub fn checked_subtract(self, rhs: Self) -> Option<Difference> {
        if self >= rhs {
            return Some(Difference::Exact(self.difference(rhs)));
        }
        tracing::trace!(lhs = %self, rhs = %rhs, "no difference in ℕ, promoting to ℤ");
        Integer::try_from_sign_magnitude(true, rhs.difference(self)).map(Difference::Promoted)
    }

    /// Division: the `x` with `b * x = a`.
    ///
    /// An inexact division is re-derived in ℚ, the closure of ℤ under
    /// division, and returned in lowest terms.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`. Division is undefined
    /// at the base of the tower.
    ///
    /// # Panics
    ///
    /// Panics if the promoted ℚ has a reduced term above `i64::MAX`, e.g.
    /// `Natural::MAX / 2`. [`checked_divide`](Self::checked_divide) returns
    /// `None` instead.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{ArithmeticError, Natural, Quotient};
    ///
    /// assert_eq!(
    ///     Natural::new(0).divide(Natural::new(42)),
    ///     Ok(Quotient::Exact(Natural::ZERO))
    /// );
    /// assert_eq!(
    ///     Natural::new(1).divide(Natural::ZERO),
    ///     Err(ArithmeticError::DivideByZero)
    /// );
    /// ```
    #[track_caller]
    pub fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        self.signed_quotient(rhs, false)
    }

    /// [`divide`](Self::divide), or `None` when the promoted ℚ does not fit
    /// the fixed-width representation.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{ArithmeticError, Natural, Quotient, Rational};
    ///
    /// assert_eq!(
    ///     Natural::new(140).checked_divide(Natural::new(11)),
    ///     Some(Ok(Quotient::Promoted(Rational::new(140, 11))))
    /// );
    /// assert_eq!(Natural::MAX.checked_divide(Natural::new(2)), None);
    /// assert_eq!(
    ///     Natural::MAX.checked_divide(Natural::ZERO),
    ///     Some(Err(ArithmeticError::DivideByZero))
    /// );
    /// ```
    #[must_use]
    pub fn checked_divide(self, rhs: Self) -> Option<Result<Quotient<Self>, ArithmeticError>> {
        self.try_signed_quotient(rhs, false)
    }

    /// Division with remainder: `a = q * b + r` with `0 <= r < b`.
    ///
    /// Agrees with [`Natural::divide`] whenever `r = 0`.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Natural;
    ///
    /// let (q, r) = Natural::new(25).divide_with_remainder(Natural::new(10)).unwrap();
    /// assert_eq!((q, r), (Natural::new(2), Natural::new(5)));
    /// ```
    pub fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
        if rhs.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok((Self(self.0 / rhs.0), Self(self.0 % rhs.0)))
    }

    /// Root: with `self` as the degree, the `b` with `b ^ self = x`.
    ///
    /// Irrational roots are not promoted; they have no solution here.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::InvalidDegree`] for a zeroth root
    /// - [`ArithmeticError::NoSolution`] when `x` is not a perfect power
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{ArithmeticError, Natural};
    ///
    /// assert_eq!(Natural::new(4).root(Natural::new(16)), Ok(Natural::new(2)));
    /// assert!(matches!(
    ///     Natural::new(2).root(Natural::new(8)),
    ///     Err(ArithmeticError::NoSolution { .. })
    /// ));
    /// ```
    pub fn root(self, x: Self) -> Result<Self, ArithmeticError> {
        if self.is_zero() {
            return Err(ArithmeticError::InvalidDegree);
        }

        // Largest b with b^degree <= x; the probe is monotone in b.
        let (mut lo, mut hi) = (0u64, x.0);
        while lo < hi {
            let mid = lo + (hi - lo).div_ceil(2);
            match Self(mid).checked_power(self) {
                Some(p) if p <= x => lo = mid,
                _ => hi = mid - 1,
            }
        }

        let b = Self(lo);
        if b.checked_power(self) == Some(x) {
            Ok(b)
        } else {
            tracing::debug!(degree = %self, x = %x, "root search overshot without a match");
            Err(ArithmeticError::NoSolution {
                operation: Operation::Root,
            })
        }
    }

    /// Logarithm: with `self` as the base, the `e` with `self ^ e = x`.
    ///
    /// # Errors
    ///
    /// - [`ArithmeticError::UndefinedForZero`] when `x = 0`
    /// - [`ArithmeticError::InvalidBase`] when the base is zero or one
    /// - [`ArithmeticError::NoSolution`] when `x` is not a power of the base
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Natural;
    ///
    /// assert_eq!(Natural::new(2).logarithm(Natural::new(65536)), Ok(Natural::new(16)));
    /// assert_eq!(Natural::new(4).logarithm(Natural::ONE), Ok(Natural::ZERO));
    /// ```
    pub fn logarithm(self, x: Self) -> Result<Self, ArithmeticError> {
        if x.is_zero() {
            return Err(ArithmeticError::UndefinedForZero);
        }
        if self.0 <= 1 {
            return Err(ArithmeticError::InvalidBase);
        }

        let mut exponent = Self::ZERO;
        let mut probe = Self::ONE;
        loop {
            if probe == x {
                return Ok(exponent);
            }
            match probe.checked_multiply(self) {
                Some(next) if next <= x => {
                    probe = next;
                    exponent = exponent.successor();
                }
                _ => break,
            }
        }

        tracing::debug!(base = %self, x = %x, "logarithm search overshot without a match");
        Err(ArithmeticError::NoSolution {
            operation: Operation::Logarithm,
        })
    }

    /// `a - b` for `a >= b`.
    #[inline]
    pub(crate) const fn difference(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }

    /// Division carrying the sign of a ℤ caller into a promoted ℚ.
    ///
    /// ℤ normalizes its operands to magnitudes and delegates here; the sign
    /// goes straight into the ℚ numerator so a `-2^63` dividend never has to
    /// exist as a positive `i64`.
    #[track_caller]
    pub(crate) fn signed_quotient(
        self,
        rhs: Self,
        negative: bool,
    ) -> Result<Quotient<Self>, ArithmeticError> {
        match self.try_signed_quotient(rhs, negative) {
            Some(quotient) => quotient,
            None => overflow(Operation::Divide),
        }
    }

    /// [`signed_quotient`](Self::signed_quotient), or `None` when a reduced
    /// term of the promoted ℚ does not fit its `i64`.
    pub(crate) fn try_signed_quotient(
        self,
        rhs: Self,
        negative: bool,
    ) -> Option<Result<Quotient<Self>, ArithmeticError>> {
        let (q, r) = match self.divide_with_remainder(rhs) {
            Ok(qr) => qr,
            Err(e) => return Some(Err(e)),
        };
        if r.is_zero() {
            return Some(Ok(Quotient::Exact(q)));
        }
        tracing::trace!(lhs = %self, rhs = %rhs, negative, "inexact division, promoting to ℚ");
        Rational::try_from_magnitudes(negative, self, rhs).map(|x| Ok(Quotient::Promoted(x)))
    }
}

impl From<u8> for Natural {
    #[inline]
    fn from(value: u8) -> Self {
        Self(u64::from(value))
    }
}

impl From<u32> for Natural {
    #[inline]
    fn from(value: u32) -> Self {
        Self(u64::from(value))
    }
}

impl From<u64> for Natural {
    #[inline]
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: u64) -> Natural {
        Natural::new(v)
    }

    #[test]
    fn test_successor_chain() {
        let mut x = Natural::ZERO;
        for i in 0..100 {
            assert_eq!(x, n(i));
            x = x.successor();
        }
        assert_eq!(n(7).predecessor(), Some(n(6)));
        assert_eq!(Natural::ZERO.predecessor(), None);
    }

    #[test]
    fn test_subtract_at_the_signed_boundary() {
        let min_magnitude = n(1 << 63);
        assert_eq!(
            n(0).checked_subtract(min_magnitude),
            Some(Difference::Promoted(Integer::new(i64::MIN)))
        );
        assert_eq!(n(0).checked_subtract(n((1 << 63) + 1)), None);
        assert_eq!(n(0).checked_subtract(Natural::MAX), None);
        assert_eq!(
            Natural::MAX.checked_subtract(n(1)),
            Some(Difference::Exact(n(u64::MAX - 1)))
        );
        assert_eq!(
            n(1 << 62).subtract(n(3 << 62)),
            Difference::Promoted(Integer::new(i64::MIN))
        );
    }

    #[test]
    #[should_panic(expected = "subtraction overflows")]
    fn test_subtract_past_the_signed_boundary() {
        let _ = n(0).subtract(Natural::MAX);
    }

    #[test]
    fn test_divide_above_the_signed_range() {
        // Exact quotients never leave ℕ
        assert_eq!(
            Natural::MAX.checked_divide(n(3)),
            Some(Ok(Quotient::Exact(n(u64::MAX / 3))))
        );
        assert_eq!(Natural::MAX.checked_divide(n(2)), None);
        assert_eq!(n(1).checked_divide(Natural::MAX), None);
        // (2^64 - 2) / 4 reduces to (2^63 - 1) / 2
        assert_eq!(
            n(u64::MAX - 1).checked_divide(n(4)),
            Some(Ok(Quotient::Promoted(Rational::new(i64::MAX, 2))))
        );
        assert_eq!(
            Natural::MAX.checked_divide(Natural::ZERO),
            Some(Err(ArithmeticError::DivideByZero))
        );
    }

    #[test]
    #[should_panic(expected = "division overflows")]
    fn test_divide_past_the_signed_range() {
        let _ = Natural::MAX.divide(n(2));
    }

    #[test]
    #[should_panic(expected = "successor overflows")]
    fn test_successor_at_max() {
        let _ = Natural::MAX.successor();
    }

    #[test]
    fn test_power_edges() {
        assert_eq!(n(0).power(n(0)), n(1));
        assert_eq!(n(1).power(n(1)), n(1));
        assert_eq!(n(0).power(n(3)), n(0));
        assert_eq!(n(3).power(n(0)), n(1));
        assert_eq!(n(1).power(Natural::MAX), n(1));
        assert_eq!(n(0).power(Natural::MAX), n(0));
        assert_eq!(n(2).checked_power(n(64)), None);
        assert_eq!(n(2).checked_power(n(63)), Some(n(1 << 63)));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(n(145).subtract(n(22)), Difference::Exact(n(123)));
        assert_eq!(n(42).subtract(n(42)), Difference::Exact(n(0)));
        assert_eq!(
            n(42).subtract(n(43)),
            Difference::Promoted(Integer::new(-1))
        );
    }

    #[test]
    fn test_divide() {
        assert_eq!(n(140).divide(n(10)), Ok(Quotient::Exact(n(14))));
        assert_eq!(
            n(140).divide(n(11)),
            Ok(Quotient::Promoted(Rational::new(140, 11)))
        );
        assert_eq!(n(42).divide(n(42)), Ok(Quotient::Exact(n(1))));
        assert_eq!(n(1).divide(n(0)), Err(ArithmeticError::DivideByZero));
    }

    #[test]
    fn test_divide_promotes_in_lowest_terms() {
        let q = n(25).divide(n(10)).unwrap();
        match q {
            Quotient::Promoted(r) => {
                assert_eq!(r.numerator(), Integer::new(5));
                assert_eq!(r.denominator(), Integer::new(2));
            }
            Quotient::Exact(_) => panic!("25/10 is not exact"),
        }
    }

    #[test]
    fn test_divide_with_remainder() {
        assert_eq!(n(140).divide_with_remainder(n(10)), Ok((n(14), n(0))));
        assert_eq!(n(140).divide_with_remainder(n(11)), Ok((n(12), n(8))));
        assert_eq!(n(0).divide_with_remainder(n(42)), Ok((n(0), n(0))));
        assert_eq!(n(10).divide_with_remainder(n(3)), Ok((n(3), n(1))));
        assert_eq!(n(3).divide_with_remainder(n(10)), Ok((n(0), n(3))));
        assert_eq!(
            n(1).divide_with_remainder(n(0)),
            Err(ArithmeticError::DivideByZero)
        );
    }

    #[test]
    fn test_root() {
        let no_solution = Err(ArithmeticError::NoSolution {
            operation: Operation::Root,
        });
        assert_eq!(n(1).root(n(1)), Ok(n(1)));
        assert_eq!(n(1).root(n(4)), Ok(n(4)));
        assert_eq!(n(4).root(n(1)), Ok(n(1)));
        assert_eq!(n(2).root(n(9)), Ok(n(3)));
        assert_eq!(n(4).root(n(16)), Ok(n(2)));
        assert_eq!(n(16).root(n(65536)), Ok(n(2)));
        assert_eq!(n(2).root(n(65536)), Ok(n(256)));
        assert_eq!(n(3).root(n(0)), Ok(n(0)));
        assert_eq!(n(2).root(n(10)), no_solution);
        assert_eq!(n(0).root(n(3)), Err(ArithmeticError::InvalidDegree));
        assert_eq!(n(0).root(n(0)), Err(ArithmeticError::InvalidDegree));
    }

    #[test]
    fn test_root_near_max() {
        let m = u64::from(u32::MAX);
        assert_eq!(n(2).root(n(m * m)), Ok(n(m)));
        assert_eq!(n(1).root(Natural::MAX), Ok(Natural::MAX));
        assert!(n(2).root(Natural::MAX).is_err());
    }

    #[test]
    fn test_logarithm() {
        let no_solution = Err(ArithmeticError::NoSolution {
            operation: Operation::Logarithm,
        });
        assert_eq!(n(1).logarithm(n(1)), Err(ArithmeticError::InvalidBase));
        assert_eq!(n(1).logarithm(n(4)), Err(ArithmeticError::InvalidBase));
        assert_eq!(n(4).logarithm(n(1)), Ok(n(0)));
        assert_eq!(n(2).logarithm(n(9)), no_solution);
        assert_eq!(n(3).logarithm(n(9)), Ok(n(2)));
        assert_eq!(n(4).logarithm(n(16)), Ok(n(2)));
        assert_eq!(n(16).logarithm(n(65536)), Ok(n(4)));
        assert_eq!(n(2).logarithm(n(65536)), Ok(n(16)));
        assert_eq!(n(3).logarithm(n(0)), Err(ArithmeticError::UndefinedForZero));
        assert_eq!(n(0).logarithm(n(3)), Err(ArithmeticError::InvalidBase));
        assert_eq!(n(0).logarithm(n(0)), Err(ArithmeticError::UndefinedForZero));
    }

    #[test]
    fn test_logarithm_near_max() {
        assert_eq!(n(2).logarithm(n(1 << 63)), Ok(n(63)));
        assert_eq!(n(2).logarithm(Natural::MAX), no_solution_log());
    }

    fn no_solution_log() -> Result<Natural, ArithmeticError> {
        Err(ArithmeticError::NoSolution {
            operation: Operation::Logarithm,
        })
    }

    #[test]
    fn test_display() {
        assert_eq!(n(42).to_string(), "42");
        assert_eq!(Natural::ZERO.to_string(), "0");
    }
}
