//! ℚ - the rationals: ℤ closed under division.
//!
//! ℚ is where the tower closes. ℕ and ℤ division promote here when inexact,
//! and nothing promotes out, so a zero denominator is a programming error
//! rather than a query result.
//!
//! # Canonical Form
//!
//! A stored pair is canonical once [`Rational::reduce`] has run: numerator
//! and denominator are divided by their greatest common divisor, found by
//! the Euclidean algorithm,
//!
//! ```text
//! A  = Q0 * B  + R0
//! B  = Q1 * R0 + R1
//! R0 = Q2 * R1 + R2
//! ...            Rn = 0  =>  gcd = R(n-1)
//! ```
//!
//! and the sign is moved onto the numerator so the denominator is positive.
//! Display, equality and hashing all read the canonical form, so `56/8`,
//! `7/1` and `-14/-2` are the same value.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::core::error::{overflow, ArithmeticError, Operation};
use crate::integer::Integer;
use crate::natural::Natural;

/// A rational number.
///
/// # Example
///
/// ```
/// use numtower::Rational;
///
/// let q = Rational::new(56, 8);
/// assert_eq!(q.reduce().to_string(), "7/1");
/// assert_eq!(q, Rational::new(7, 1));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

/// Greatest common divisor by successive Euclidean remainders.
///
/// `gcd(x, 0) = 1` guards the degenerate case; it never arises for a
/// constructed [`Rational`], whose denominator is non-zero.
///
/// # Example
///
/// ```
/// use numtower::{rational::gcd, Natural};
///
/// assert_eq!(gcd(Natural::new(56), Natural::new(8)), Natural::new(8));
/// assert_eq!(gcd(Natural::new(140), Natural::new(11)), Natural::ONE);
/// assert_eq!(gcd(Natural::ZERO, Natural::new(5)), Natural::new(5));
/// ```
#[must_use]
pub fn gcd(a: Natural, b: Natural) -> Natural {
    if b.is_zero() {
        return Natural::ONE;
    }
    let (mut r0, mut r1) = (a, b);
    loop {
        match r0.divide_with_remainder(r1) {
            Ok((_, r)) if r.is_zero() => return r1,
            Ok((_, r)) => {
                r0 = r1;
                r1 = r;
            }
            // r1 is a non-zero remainder on every iteration
            Err(_) => return Natural::ONE,
        }
    }
}

impl Rational {
    /// Stores the pair `numerator / denominator` as given.
    ///
    /// The value is canonical only after [`Rational::reduce`].
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero.
    #[must_use]
    #[track_caller]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        assert!(denominator != 0, "ℚ constructed with a zero denominator");
        Self {
            numerator,
            denominator,
        }
    }

    /// Recoverable form of [`Rational::new`].
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivideByZero`] if `denominator` is zero.
    pub const fn try_new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivideByZero);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// The definition of ℚ: the rational `a / b` for two integers.
    ///
    /// # Panics
    ///
    /// Panics if `b` is zero.
    #[must_use]
    #[track_caller]
    pub const fn from_quotient(a: Integer, b: Integer) -> Self {
        Self::new(a.value(), b.value())
    }

    /// The stored numerator (not necessarily reduced).
    #[inline]
    #[must_use]
    pub const fn numerator(&self) -> Integer {
        Integer::new(self.numerator)
    }

    /// The stored denominator (not necessarily reduced).
    #[inline]
    #[must_use]
    pub const fn denominator(&self) -> Integer {
        Integer::new(self.denominator)
    }

    /// Canonical form: lowest terms, positive denominator.
    ///
    /// Idempotent: reducing a canonical value returns it unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the sign normalization needs `2^63` as a positive `i64`,
    /// e.g. `1 / i64::MIN`.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Rational;
    ///
    /// let q = Rational::new(-14, -4).reduce();
    /// assert_eq!((q.numerator().value(), q.denominator().value()), (7, 2));
    /// assert_eq!(q.reduce(), q);
    /// ```
    #[must_use]
    #[track_caller]
    pub fn reduce(self) -> Self {
        match self.checked_reduce() {
            Some(q) => q,
            None => overflow(Operation::Reduce),
        }
    }

    /// [`reduce`](Self::reduce), or `None` when the canonical form needs
    /// `2^63` as a positive `i64`.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::Rational;
    ///
    /// assert_eq!(Rational::new(56, 8).checked_reduce(), Some(Rational::new(7, 1)));
    /// assert_eq!(Rational::new(1, i64::MIN).checked_reduce(), None);
    /// ```
    #[must_use]
    pub fn checked_reduce(self) -> Option<Self> {
        let negative = (self.numerator < 0) != (self.denominator < 0);
        Self::try_from_magnitudes(
            negative,
            self.numerator().magnitude(),
            self.denominator().magnitude(),
        )
    }

    /// Returns `true` if the stored pair is in canonical form.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.denominator > 0
            && gcd(self.numerator().magnitude(), self.denominator().magnitude()) == Natural::ONE
    }

    /// Returns `true` if the value is an integer.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        // i64::MIN % -1 overflows but divides evenly
        match self.numerator.checked_rem(self.denominator) {
            Some(r) => r == 0,
            None => true,
        }
    }

    /// Demotes to ℤ when the reduced denominator is one.
    ///
    /// # Example
    ///
    /// ```
    /// use numtower::{Integer, Rational};
    ///
    /// assert_eq!(Rational::new(-56, 8).to_integer(), Some(Integer::new(-7)));
    /// assert_eq!(Rational::new(1, 2).to_integer(), None);
    /// ```
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        let canonical = self.reduce();
        if canonical.denominator == 1 {
            Some(canonical.numerator())
        } else {
            None
        }
    }

    /// Builds the canonical `±num / den` from magnitudes, or `None` when a
    /// reduced term does not fit its `i64`.
    ///
    /// Used by ℕ and ℤ division, whose operands are already normalized to
    /// magnitudes.
    pub(crate) fn try_from_magnitudes(
        negative: bool,
        numerator: Natural,
        denominator: Natural,
    ) -> Option<Self> {
        let g = gcd(numerator, denominator);
        let (num, den) = match (
            numerator.divide_with_remainder(g),
            denominator.divide_with_remainder(g),
        ) {
            (Ok((num, _)), Ok((den, _))) => (num, den),
            _ => (numerator, denominator),
        };
        let negative = negative && !num.is_zero();
        let n = Integer::try_from_sign_magnitude(negative, num)?;
        let d = Integer::try_from_sign_magnitude(false, den)?;
        Some(Self::new(n.value(), d.value()))
    }
}

impl From<Integer> for Rational {
    #[inline]
    fn from(z: Integer) -> Self {
        Self {
            numerator: z.value(),
            denominator: 1,
        }
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.reduce(), other.reduce());
        a.numerator == b.numerator && a.denominator == b.denominator
    }
}

impl Eq for Rational {}

impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.reduce();
        canonical.numerator.hash(state);
        canonical.denominator.hash(state);
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.reduce();
        write!(f, "{}/{}", canonical.numerator, canonical.denominator)
    }
}

impl From<Rational> for String {
    fn from(q: Rational) -> Self {
        q.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(q: Rational) -> (i64, i64) {
        (q.numerator().value(), q.denominator().value())
    }

    #[test]
    fn test_gcd() {
        let n = Natural::new;
        assert_eq!(gcd(n(56), n(8)), n(8));
        assert_eq!(gcd(n(8), n(56)), n(8));
        assert_eq!(gcd(n(140), n(11)), n(1));
        assert_eq!(gcd(n(0), n(7)), n(7));
        assert_eq!(gcd(n(7), n(0)), n(1));
        assert_eq!(gcd(n(0), n(0)), n(1));
        assert_eq!(gcd(n(1 << 63), n(1 << 40)), n(1 << 40));
    }

    #[test]
    fn test_reduce() {
        assert_eq!(parts(Rational::new(56, 8).reduce()), (7, 1));
        assert_eq!(parts(Rational::new(140, 11).reduce()), (140, 11));
        assert_eq!(parts(Rational::new(-14, -4).reduce()), (7, 2));
        assert_eq!(parts(Rational::new(14, -4).reduce()), (-7, 2));
        assert_eq!(parts(Rational::new(-14, 4).reduce()), (-7, 2));
        assert_eq!(parts(Rational::new(0, -5).reduce()), (0, 1));
        assert_eq!(parts(Rational::new(i64::MIN, 2).reduce()), (i64::MIN / 2, 1));
    }

    #[test]
    fn test_reduce_idempotent() {
        let once = Rational::new(-90, 24).reduce();
        assert_eq!(parts(once.reduce()), parts(once));
        assert!(once.is_canonical());
    }

    #[test]
    fn test_canonical_flags() {
        assert!(!Rational::new(56, 8).is_canonical());
        assert!(!Rational::new(1, -2).is_canonical());
        assert!(Rational::new(-1, 2).is_canonical());
        assert!(!Rational::new(0, 5).is_canonical());
        assert!(Rational::new(0, 1).is_canonical());
    }

    #[test]
    fn test_equality_reads_canonical_form() {
        assert_eq!(Rational::new(56, 8), Rational::new(7, 1));
        assert_eq!(Rational::new(1, -2), Rational::new(-1, 2));
        assert_ne!(Rational::new(1, 2), Rational::new(1, 3));
    }

    #[test]
    fn test_integral() {
        assert!(Rational::new(56, 8).is_integral());
        assert!(!Rational::new(1, 2).is_integral());
        assert_eq!(Rational::new(0, 3).to_integer(), Some(Integer::ZERO));
        assert_eq!(Rational::from(Integer::new(-4)).to_integer(), Some(Integer::new(-4)));
    }

    #[test]
    fn test_display_reduces() {
        assert_eq!(Rational::new(56, 8).to_string(), "7/1");
        assert_eq!(Rational::new(3, -6).to_string(), "-1/2");
        assert_eq!(String::from(Rational::new(140, 11)), "140/11");
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Rational::try_new(1, 0), Err(ArithmeticError::DivideByZero));
        assert_eq!(Rational::try_new(2, 4), Ok(Rational::new(1, 2)));
    }

    #[test]
    #[should_panic(expected = "zero denominator")]
    fn test_zero_denominator_panics() {
        let _ = Rational::new(1, 0);
    }

    #[test]
    #[should_panic(expected = "reduction overflows")]
    fn test_unrepresentable_denominator() {
        let _ = Rational::new(1, i64::MIN).reduce();
    }

    #[test]
    fn test_checked_reduce_at_the_sign_boundary() {
        assert_eq!(Rational::new(1, i64::MIN).checked_reduce(), None);
        assert_eq!(Rational::new(i64::MIN, -1).checked_reduce(), None);
        assert_eq!(Rational::new(2, i64::MIN).checked_reduce(), Some(Rational::new(-1, 1 << 62)));
        let q = Rational::new(i64::MIN, 3).checked_reduce().unwrap();
        assert_eq!((q.numerator().value(), q.denominator().value()), (i64::MIN, 3));
        assert_eq!(
            Rational::try_from_magnitudes(true, Natural::new(1), Natural::new(1 << 63)),
            None
        );
    }
}
