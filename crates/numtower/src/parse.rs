//! Decimal literals for the three number systems.
//!
//! | Type | Grammar | Example |
//! |------|---------|---------|
//! | [`Natural`] | `digit+` | `42` |
//! | [`Integer`] | `[+-]? digit+` | `-1205` |
//! | [`Rational`] | `integer '/' integer` | `-140/11` |
//!
//! Malformed input is always a [`ParseError`]; nothing silently parses as
//! zero. Rational literals are returned in canonical form.

use core::str::FromStr;

use crate::core::error::ParseError;
use crate::integer::Integer;
use crate::natural::Natural;
use crate::rational::Rational;

/// Parses `digit+` starting at character `offset` of the whole literal.
fn parse_magnitude(s: &str, offset: usize) -> Result<Natural, ParseError> {
    if s.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut value = Natural::ZERO;
    for (i, c) in s.chars().enumerate() {
        let digit = c.to_digit(10).ok_or(ParseError::InvalidDigit {
            character: c,
            position: offset + i,
        })?;
        value = value
            .checked_multiply(Natural::new(10))
            .and_then(|v| v.checked_add(Natural::from(digit)))
            .ok_or(ParseError::Overflow)?;
    }
    Ok(value)
}

/// Parses `[+-]? digit+` starting at character `offset` of the whole literal.
fn parse_signed(s: &str, offset: usize) -> Result<Integer, ParseError> {
    let (negative, digits, skipped) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..], 1),
        Some(b'+') => (false, &s[1..], 1),
        _ => (false, s, 0),
    };
    let magnitude = parse_magnitude(digits, offset + skipped)?;
    Integer::try_from_sign_magnitude(negative, magnitude).ok_or(ParseError::Overflow)
}

impl FromStr for Natural {
    type Err = ParseError;

    /// # Example
    ///
    /// ```
    /// use numtower::{Natural, ParseError};
    ///
    /// assert_eq!("42".parse::<Natural>(), Ok(Natural::new(42)));
    /// assert_eq!("".parse::<Natural>(), Err(ParseError::Empty));
    /// assert!("-1".parse::<Natural>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_magnitude(s, 0)
    }
}

impl FromStr for Integer {
    type Err = ParseError;

    /// # Example
    ///
    /// ```
    /// use numtower::Integer;
    ///
    /// assert_eq!("-1205".parse::<Integer>(), Ok(Integer::new(-1205)));
    /// assert_eq!("+7".parse::<Integer>(), Ok(Integer::new(7)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_signed(s, 0)
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    /// # Example
    ///
    /// ```
    /// use numtower::Rational;
    ///
    /// let q: Rational = "56/8".parse().unwrap();
    /// assert_eq!(q.to_string(), "7/1");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (num, den) = s.split_once('/').ok_or(ParseError::MissingSeparator)?;
        let numerator = parse_signed(num, 0)?;
        let denominator = parse_signed(den, num.chars().count() + 1)?;
        if denominator.is_zero() {
            return Err(ParseError::ZeroDenominator);
        }
        Rational::from_quotient(numerator, denominator)
            .checked_reduce()
            .ok_or(ParseError::Overflow)
    }
}

impl TryFrom<String> for Rational {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
