//! ℤ - the integers: ℕ closed under subtraction.
//!
//! ℤ is defined as "ℕ minus ℕ". When `a < b`, `a` is decreased to zero and
//! `a - b = 0 - (b - a)` is a negative integer: a natural with `-` in front.
//!
//! Every binary operation splits on the signs of its operands, delegates the
//! unsigned part to ℕ, and puts the sign back:
//!
//! ```text
//! A + B:  A >= 0, B >= 0:  A + B                (ℕ)
//!         A >= 0, B <  0:  A - |B|              (ℕ subtract, may promote)
//!         A <  0, B >= 0:  B - |A|
//!         A <  0, B <  0:  -(|A| + |B|)
//!
//! A * B:  same signs:      |A| * |B|
//!         mixed signs:     -(|A| * |B|)
//!
//! A ^ B:  B >= 0:          |A| ^ B, negative iff A < 0 and B odd
//!         B <  0:          1 / A ^ |B|           (may promote to ℚ)
//! ```
//!
//! Root and logarithm are not answered here: there is no real or complex
//! level above ℚ to promote into.

use core::fmt;

use crate::core::error::{overflow, ArithmeticError, Operation};
use crate::core::promotion::{Difference, Quotient};
use crate::natural::Natural;

/// Magnitude of `i64::MIN`, the only negative value without a positive twin.
const MIN_MAGNITUDE: u64 = 1 << 63;

/// An integer.
///
/// # Example
///
/// ```
/// use numtower::{Integer, Natural};
///
/// let z = Integer::from_difference(Natural::new(6), Natural::new(1211));
/// assert_eq!(z, Integer::new(-1205));
/// assert_eq!(z.magnitude(), Natural::new(1205));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Integer(i64);

impl Integer {
    /// Zero. Carries no sign.
    pub const ZERO: Self = Self(0);

    /// One.
    pub const ONE: Self = Self(1);

    /// Creates an integer from its value.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Returns `true` for zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` below zero.
    #[inline]
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// `-1`, `0` or `1`.
    #[inline]
    #[must_use]
    pub const fn signum(self) -> Self {
        Self(self.0.signum())
    }

    /// The absolute value as a natural.
    #[inline]
    #[must_use]
    pub const fn magnitude(self) -> Natural {
        Natural::new(self.0.unsigned_abs())
    }

    /// Embeds a natural into ℤ.
    ///
    /// # Panics
    ///
    /// Panics if `n` exceeds `i64::MAX`.
    #[must_use]
    #[track_caller]
    pub fn from_natural(n: Natural) -> Self {
        Self::from_sign_magnitude(false, n, Operation::Promote)
    }

    /// Demotes to ℕ when non-negative.
    #[inline]
    #[must_use]
    pub const fn to_natural(self) -> Option<Natural> {
        if self.0 >= 0 {
            Some(self.magnitude())
        } else {
            None
        }
    }

    /// The definition of ℤ: the integer `a - b` for two naturals.
    ///
    /// # Panics
    ///
    /// Panics if the difference leaves the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Integer, Natural};
    ///
    /// assert_eq!(Integer::from_difference(Natural::new(42), Natural::new(43)), Integer::new(-1));
    /// assert_eq!(Integer::from_difference(Natural::new(43), Natural::new(42)), Integer::ONE);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn from_difference(a: Natural, b: Natural) -> Self {
        if a >= b {
            Self::from_sign_magnitude(false, a.difference(b), Operation::Subtract)
        } else {
            Self::from_sign_magnitude(true, b.difference(a), Operation::Subtract)
        }
    }

    /// The additive inverse.
    ///
    /// # Panics
    ///
    /// Panics for `i64::MIN`.
    #[must_use]
    #[track_caller]
    pub fn negate(self) -> Self {
        match self.0.checked_neg() {
            Some(v) => Self(v),
            None => overflow(Operation::Negate),
        }
    }

    /// `a + b`, or `None` outside the `i64` range.
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `a - b`, or `None` outside the `i64` range.
    #[must_use]
    pub const fn checked_subtract(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// `a * b`, or `None` outside the `i64` range.
    #[must_use]
    pub const fn checked_multiply(self, rhs: Self) -> Option<Self> {
        match self.0.checked_mul(rhs.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// [`power`](Self::power), or `None` when `a ^ |b|` (or its reciprocal)
    /// does not fit the fixed-width representation.
    #[must_use]
    pub fn checked_power(self, rhs: Self) -> Option<Result<Quotient<Self>, ArithmeticError>> {
        let magnitude = self.magnitude().checked_power(rhs.magnitude())?;
        let negative = self.is_negative() && rhs.magnitude().value() % 2 == 1;
        let raised = Self::try_from_sign_magnitude(negative, magnitude)?;
        if !rhs.is_negative() {
            return Some(Ok(Quotient::Exact(raised)));
        }
        Self::ONE.checked_divide(raised)
    }

    /// `a + b` by the four sign cases.
    ///
    /// # Panics
    ///
    /// Panics if the sum leaves the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Integer;
    ///
    /// assert_eq!(Integer::new(1).add(Integer::new(-3)), Integer::new(-2));
    /// assert_eq!(Integer::new(-10).add(Integer::new(-3)), Integer::new(-13));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn add(self, rhs: Self) -> Self {
        let (a, b) = (self.magnitude(), rhs.magnitude());
        match (self.is_negative(), rhs.is_negative()) {
            (false, false) => Self::from_sign_magnitude(false, a.add(b), Operation::Add),
            (false, true) => Self::from_difference(a, b),
            (true, false) => Self::from_difference(b, a),
            (true, true) => Self::from_sign_magnitude(true, a.add(b), Operation::Add),
        }
    }

    /// `a * b` by the four sign cases.
    ///
    /// # Panics
    ///
    /// Panics if the product leaves the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Integer;
    ///
    /// assert_eq!(Integer::new(-10).multiply(Integer::new(3)), Integer::new(-30));
    /// assert_eq!(Integer::new(-10).multiply(Integer::new(-3)), Integer::new(30));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn multiply(self, rhs: Self) -> Self {
        let product = self.magnitude().multiply(rhs.magnitude());
        let negative = self.is_negative() != rhs.is_negative();
        Self::from_sign_magnitude(negative, product, Operation::Multiply)
    }

    /// `a - b`; total in ℤ.
    ///
    /// The same-sign cases go through ℕ subtraction, which promotes back into
    /// ℤ when it underflows.
    ///
    /// # Panics
    ///
    /// Panics if the difference leaves the `i64` range.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Integer;
    ///
    /// assert_eq!(Integer::new(3).subtract(Integer::new(-4)), Integer::new(7));
    /// assert_eq!(Integer::new(-3).subtract(Integer::new(-4)), Integer::new(1));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn subtract(self, rhs: Self) -> Self {
        let (a, b) = (self.magnitude(), rhs.magnitude());
        match (self.is_negative(), rhs.is_negative()) {
            (false, false) => Self::lift(a.subtract(b)),
            (false, true) => Self::from_sign_magnitude(false, a.add(b), Operation::Subtract),
            (true, false) => Self::from_sign_magnitude(true, a.add(b), Operation::Subtract),
            (true, true) => Self::lift(b.subtract(a)),
        }
    }

    /// `a ^ b`.
    ///
    /// A negative exponent is `1 / a ^ |b|`, which stays in ℤ only for units
    /// and is otherwise promoted to ℚ.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] for a negative power of zero.
    ///
    /// # Panics
    ///
    /// Panics if `a ^ |b|` leaves the `i64` range, or if its reciprocal needs
    /// `2^63` as a denominator.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Integer, Quotient, Rational};
    ///
    /// assert_eq!(Integer::new(-2).power(Integer::new(3)), Ok(Quotient::Exact(Integer::new(-8))));
    /// assert_eq!(Integer::new(1).power(Integer::new(-1)), Ok(Quotient::Exact(Integer::ONE)));
    /// assert_eq!(
    ///     Integer::new(2).power(Integer::new(-1)),
    ///     Ok(Quotient::Promoted(Rational::new(1, 2)))
    /// );
    /// ```
    #[track_caller]
    pub fn power(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        let raised = self.power_natural(rhs.magnitude());
        if !rhs.is_negative() {
            return Ok(Quotient::Exact(raised));
        }
        tracing::trace!(base = %self, exponent = %rhs, "negative exponent, taking the reciprocal");
        Self::ONE.divide(raised)
    }

    /// `a / b`.
    ///
    /// Operands are normalized to magnitudes and divided in ℕ; mixed signs
    /// negate the exact quotient or the numerator of the promoted ℚ.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    ///
    /// # Panics
    ///
    /// Panics for `i64::MIN / -1`, and when the promoted ℚ needs `2^63` as
    /// its denominator (`1 / i64::MIN`). [`checked_divide`](Self::checked_divide)
    /// returns `None` instead.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Integer, Quotient, Rational};
    ///
    /// assert_eq!(
    ///     Integer::new(-140).divide(Integer::new(10)),
    ///     Ok(Quotient::Exact(Integer::new(-14)))
    /// );
    /// assert_eq!(
    ///     Integer::new(140).divide(Integer::new(-11)),
    ///     Ok(Quotient::Promoted(Rational::new(-140, 11)))
    /// );
    /// ```
    #[track_caller]
    pub fn divide(self, rhs: Self) -> Result<Quotient<Self>, ArithmeticError> {
        let negative = self.is_negative() != rhs.is_negative();
        let quotient = self
            .magnitude()
            .signed_quotient(rhs.magnitude(), negative)?;
        Ok(quotient.map_exact(|q| Self::from_sign_magnitude(negative, q, Operation::Divide)))
    }

    /// [`divide`](Self::divide), or `None` when the quotient does not fit
    /// the fixed-width representation.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Integer, Quotient, Rational};
    ///
    /// assert_eq!(
    ///     Integer::new(-7).checked_divide(Integer::new(2)),
    ///     Some(Ok(Quotient::Promoted(Rational::new(-7, 2))))
    /// );
    /// assert_eq!(Integer::new(1).checked_divide(Integer::new(i64::MIN)), None);
    /// assert_eq!(Integer::new(i64::MIN).checked_divide(Integer::new(-1)), None);
    /// ```
    #[must_use]
    pub fn checked_divide(self, rhs: Self) -> Option<Result<Quotient<Self>, ArithmeticError>> {
        let negative = self.is_negative() != rhs.is_negative();
        let quotient = match self
            .magnitude()
            .try_signed_quotient(rhs.magnitude(), negative)?
        {
            Ok(quotient) => quotient,
            Err(e) => return Some(Err(e)),
        };
        match quotient {
            Quotient::Exact(q) => {
                Self::try_from_sign_magnitude(negative, q).map(|z| Ok(Quotient::Exact(z)))
            }
            Quotient::Promoted(x) => Some(Ok(Quotient::Promoted(x))),
        }
    }

    /// Truncating division: `a = q * b + r` with `|r| < |b|`.
    ///
    /// The quotient is negative when exactly one operand is; the remainder
    /// takes the sign of the dividend.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] when `b = 0`.
    ///
    /// # Panics
    ///
    /// Panics for `i64::MIN / -1`.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Integer;
    ///
    /// assert_eq!(
    ///     Integer::new(-7).divide_with_remainder(Integer::new(2)),
    ///     Ok((Integer::new(-3), Integer::new(-1)))
    /// );
    /// ```
    #[track_caller]
    pub fn divide_with_remainder(self, rhs: Self) -> Result<(Self, Self), ArithmeticError> {
        let (q, r) = self.magnitude().divide_with_remainder(rhs.magnitude())?;
        let negative_quotient = self.is_negative() != rhs.is_negative();
        Ok((
            Self::from_sign_magnitude(negative_quotient, q, Operation::DivideWithRemainder),
            Self::from_sign_magnitude(self.is_negative(), r, Operation::DivideWithRemainder),
        ))
    }

    /// [`divide_with_remainder`](Self::divide_with_remainder), or `None` for
    /// `i64::MIN / -1`.
    #[must_use]
    pub fn checked_divide_with_remainder(
        self,
        rhs: Self,
    ) -> Option<Result<(Self, Self), ArithmeticError>> {
        let (q, r) = match self.magnitude().divide_with_remainder(rhs.magnitude()) {
            Ok(qr) => qr,
            Err(e) => return Some(Err(e)),
        };
        let negative_quotient = self.is_negative() != rhs.is_negative();
        let q = Self::try_from_sign_magnitude(negative_quotient, q)?;
        let r = Self::try_from_sign_magnitude(self.is_negative(), r)?;
        Some(Ok((q, r)))
    }

    /// Not defined in ℤ.
    ///
    /// # Errors
    ///
    /// Always [`ArithmeticError::Unimplemented`].
    pub fn root(self, _x: Self) -> Result<Self, ArithmeticError> {
        Err(ArithmeticError::Unimplemented {
            operation: Operation::Root,
        })
    }

    /// Not defined in ℤ.
    ///
    /// # Errors
    ///
    /// Always [`ArithmeticError::Unimplemented`].
    pub fn logarithm(self, _x: Self) -> Result<Self, ArithmeticError> {
        Err(ArithmeticError::Unimplemented {
            operation: Operation::Logarithm,
        })
    }

    /// `a ^ e` for a natural exponent; the sign follows the parity of `e`.
    #[track_caller]
    fn power_natural(self, exponent: Natural) -> Self {
        let raised = self.magnitude().power(exponent);
        let negative = self.is_negative() && exponent.value() % 2 == 1;
        Self::from_sign_magnitude(negative, raised, Operation::Power)
    }

    /// Lifts an ℕ difference (either branch) into ℤ.
    #[track_caller]
    fn lift(difference: Difference) -> Self {
        match difference {
            Difference::Exact(n) => Self::from_sign_magnitude(false, n, Operation::Subtract),
            Difference::Promoted(z) => z,
        }
    }

    /// Puts `-` in front of a natural, or not.
    pub(crate) const fn try_from_sign_magnitude(
        negative: bool,
        magnitude: Natural,
    ) -> Option<Self> {
        let m = magnitude.value();
        if negative {
            if m == MIN_MAGNITUDE {
                Some(Self(i64::MIN))
            } else if m < MIN_MAGNITUDE {
                Some(Self(-(m as i64)))
            } else {
                None
            }
        } else if m < MIN_MAGNITUDE {
            Some(Self(m as i64))
        } else {
            None
        }
    }

    #[track_caller]
    pub(crate) fn from_sign_magnitude(
        negative: bool,
        magnitude: Natural,
        operation: Operation,
    ) -> Self {
        match Self::try_from_sign_magnitude(negative, magnitude) {
            Some(z) => z,
            None => overflow(operation),
        }
    }
}

impl From<i32> for Integer {
    #[inline]
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl From<i64> for Integer {
    #[inline]
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
