//! numtower - an axiomatic tower of exact number systems.
//!
//! Three layered value types, each built only from the one below it:
//!
//! | System | Type | Defined as | Closes |
//! |--------|------|------------|--------|
//! | ℕ | [`Natural`] | zero and successor | - |
//! | ℤ | [`Integer`] | ℕ minus ℕ | subtraction |
//! | ℚ | [`Rational`] | ℤ divided by ℤ | division |
//!
//! # Promotion
//!
//! When an operation has no solution in the system it was asked in, the
//! answer is re-derived one level up and returned in the richer type:
//!
//! ```text
//! ℕ subtract (a < b)        ──►  ℤ       Difference::Promoted
//! ℕ / ℤ divide (inexact)    ──►  ℚ       Quotient::Promoted
//! ℤ power (b < 0, inexact)  ──►  ℚ       Quotient::Promoted
//! ```
//!
//! ℚ is the closure point: nothing promotes out of it, which is why a zero
//! denominator panics while every other failure is an [`ArithmeticError`].
//!
//! # Example
//!
//! ```
//! use numtower::prelude::*;
//!
//! let a = Natural::new(42);
//! let b = Natural::new(43);
//!
//! // No difference in ℕ: promoted to ℤ
//! assert_eq!(a.subtract(b), Difference::Promoted(Integer::new(-1)));
//!
//! // Inexact division: promoted to ℚ in lowest terms
//! let q = Natural::new(140).divide(Natural::new(11)).unwrap();
//! assert_eq!(q.to_string(), "140/11");
//!
//! // Questions without an answer are errors, not faults
//! assert_eq!(Natural::new(1).divide(Natural::ZERO), Err(ArithmeticError::DivideByZero));
//! assert_eq!(Natural::new(4).root(Natural::new(16)), Ok(Natural::new(2)));
//! ```
//!
//! # Derivation
//!
//! [`axioms`] writes every ℕ operation out from the successor primitive, the
//! way it is defined. [`Natural`] answers the same questions in closed form;
//! the test suite checks the two against each other.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for all three types. ℕ and ℤ are
//!   plain numbers, ℚ is its canonical `"num/den"` string.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![deny(missing_docs, clippy::missing_errors_doc)]

// Shared vocabulary (errors, promotion results, operation traits)
mod core;

// The three number systems
pub mod integer;
pub mod natural;
pub mod rational;

// Successor-only reference derivations
pub mod axioms;

// Decimal literals
mod parse;

// Re-export submodules for external access
pub use core::error;
pub use core::promotion;
pub use core::traits;

// Re-export core types at crate root
pub use core::error::{ArithmeticError, Operation, ParseError};
pub use core::promotion::{Difference, Quotient};
pub use core::traits::{IntegerOperations, NaturalOperations, RationalOperations, Successor};
pub use integer::Integer;
pub use natural::Natural;
pub use rational::Rational;

/// Prelude module for convenient imports.
///
/// ```
/// use numtower::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::error::{ArithmeticError, Operation, ParseError};
    pub use crate::core::promotion::{Difference, Quotient};
    pub use crate::integer::Integer;
    pub use crate::natural::Natural;
    pub use crate::rational::Rational;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tower_scenarios() {
        assert_eq!(
            Natural::new(140).divide(Natural::new(10)),
            Ok(Quotient::Exact(Natural::new(14)))
        );
        assert_eq!(
            Natural::new(140).divide(Natural::new(11)),
            Ok(Quotient::Promoted(Rational::new(140, 11)))
        );
        assert_eq!(
            Natural::new(42).subtract(Natural::new(43)),
            Difference::Promoted(Integer::new(-1))
        );
        assert_eq!(
            Natural::new(2).power(Natural::new(16)),
            Natural::new(65536)
        );
        assert_eq!(Natural::new(4).root(Natural::new(16)), Ok(Natural::new(2)));
        assert_eq!(
            Natural::new(2).logarithm(Natural::new(65536)),
            Ok(Natural::new(16))
        );
        assert_eq!(
            Natural::new(1).divide(Natural::ZERO),
            Err(ArithmeticError::DivideByZero)
        );
        assert_eq!(Rational::new(56, 8).reduce().to_string(), "7/1");
    }

    #[test]
    fn test_zero_is_shared_identity() {
        let x = Natural::new(9);
        assert_eq!(x.add(Natural::ZERO), x);
        assert_eq!(Natural::ZERO, <Natural as Successor>::ZERO);
        assert_eq!(Integer::from_natural(Natural::ZERO), Integer::ZERO);
    }

    #[test]
    fn test_promotion_chain_reaches_rational() {
        // ℕ subtract promotes to ℤ, whose division promotes to ℚ
        let z = Natural::new(3).subtract(Natural::new(10)).to_integer();
        let q = z.divide(Integer::new(2)).unwrap();
        assert_eq!(q, Quotient::Promoted(Rational::new(-7, 2)));
        assert_eq!(q.to_rational().to_integer(), None);
    }
}
