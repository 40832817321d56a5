//! ℕ arithmetic derived from the successor primitive alone.
//!
//! Each function here is the literal definition of an ℕ operation, written
//! against nothing but [`Successor`]: zero, "add one", and the order that
//! "add one" induces. Each operation is built from the one before it:
//!
//! ```text
//! successor ─► add ─► multiply ─► power
//!               │        │          │
//!               ▼        ▼          ▼
//!           subtract   divide    root, logarithm
//! ```
//!
//! The inverse operations are monotone linear searches: the probe never
//! decreases as the search variable grows, and each search stops the moment
//! the probe meets or passes its target, so every search terminates.
//!
//! Running time is proportional to the *values* involved. These are the
//! reference semantics that [`Natural`](crate::Natural)'s closed forms are
//! verified against, not something to run on large inputs.

use crate::core::error::{ArithmeticError, Operation};
use crate::core::traits::Successor;

/// One: the successor of zero.
#[inline]
pub fn one<N: Successor>() -> N {
    N::ZERO.successor()
}

/// Start with `a` and count one unit `b` times.
pub fn add<N: Successor>(a: N, b: N) -> N {
    let mut sum = a;
    let mut count = N::ZERO;
    while count < b {
        sum = sum.successor();
        count = count.successor();
    }
    sum
}

/// Start with nothing and add `a` to it `b` times.
pub fn multiply<N: Successor>(a: N, b: N) -> N {
    let mut product = N::ZERO;
    let mut count = N::ZERO;
    while count < b {
        product = add(product, a);
        count = count.successor();
    }
    product
}

/// Start with one and multiply it by `a`, `b` times.
pub fn power<N: Successor>(a: N, b: N) -> N {
    let mut result = one();
    let mut count = N::ZERO;
    while count < b {
        result = multiply(result, a);
        count = count.successor();
    }
    result
}

/// The `x` with `b + x = a`, or `None` when `a < b`.
///
/// `None` is where ℕ runs out; the caller promotes to ℤ.
pub fn subtract<N: Successor>(a: N, b: N) -> Option<N> {
    if a < b {
        return None;
    }
    let mut x = N::ZERO;
    while add(b, x) != a {
        x = x.successor();
    }
    Some(x)
}

/// The `x` with `b * x = a`.
///
/// `Ok(None)` means `b * x` passed `a` without meeting it: the division is
/// inexact and the caller promotes to ℚ.
///
/// # Errors
///
/// [`ArithmeticError::DivideByZero`] when `b = 0`.
pub fn divide<N: Successor>(a: N, b: N) -> Result<Option<N>, ArithmeticError> {
    if b == N::ZERO {
        return Err(ArithmeticError::DivideByZero);
    }
    let mut x = N::ZERO;
    loop {
        let probe = multiply(b, x);
        if probe == a {
            return Ok(Some(x));
        }
        if probe > a {
            return Ok(None);
        }
        x = x.successor();
    }
}

/// `(q, r)` with `a = q * b + r` and `r < b`.
///
/// # Errors
///
/// [`ArithmeticError::DivideByZero`] when `b = 0`.
pub fn divide_with_remainder<N: Successor>(a: N, b: N) -> Result<(N, N), ArithmeticError> {
    if b == N::ZERO {
        return Err(ArithmeticError::DivideByZero);
    }
    let mut q = N::ZERO;
    loop {
        let next = q.successor();
        if multiply(b, next) > a {
            break;
        }
        q = next;
    }
    // b * q <= a, so the difference exists in ℕ
    let floor = multiply(b, q);
    let mut r = N::ZERO;
    while add(floor, r) != a {
        r = r.successor();
    }
    Ok((q, r))
}

/// The `b` with `b ^ degree = x`.
///
/// # Errors
///
/// [`ArithmeticError::InvalidDegree`] for a zeroth root,
/// [`ArithmeticError::NoSolution`] when `b ^ degree` passes `x`.
pub fn root<N: Successor>(degree: N, x: N) -> Result<N, ArithmeticError> {
    if degree == N::ZERO {
        return Err(ArithmeticError::InvalidDegree);
    }
    let mut b = N::ZERO;
    loop {
        let probe = power(b, degree);
        if probe == x {
            return Ok(b);
        }
        if probe > x {
            return Err(ArithmeticError::NoSolution {
                operation: Operation::Root,
            });
        }
        b = b.successor();
    }
}

/// The `e` with `base ^ e = x`.
///
/// # Errors
///
/// [`ArithmeticError::UndefinedForZero`] when `x = 0`,
/// [`ArithmeticError::InvalidBase`] for base zero or one (`1 ^ e` is always
/// one), [`ArithmeticError::NoSolution`] when `base ^ e` passes `x`.
pub fn logarithm<N: Successor>(base: N, x: N) -> Result<N, ArithmeticError> {
    if x == N::ZERO {
        return Err(ArithmeticError::UndefinedForZero);
    }
    if base == N::ZERO || base == one() {
        return Err(ArithmeticError::InvalidBase);
    }
    let mut e = N::ZERO;
    loop {
        let probe = power(base, e);
        if probe == x {
            return Ok(e);
        }
        if probe > x {
            return Err(ArithmeticError::NoSolution {
                operation: Operation::Logarithm,
            });
        }
        e = e.successor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::natural::Natural;

    fn n(v: u64) -> Natural {
        Natural::new(v)
    }

    #[test]
    fn test_successor_generation() {
        let mut x: Natural = Natural::ZERO;
        for _ in 0..42 {
            x = add(x, one());
        }
        assert_eq!(x, n(42));
    }

    #[test]
    fn test_derived_chain() {
        assert_eq!(add(n(42), n(18)), n(60));
        assert_eq!(multiply(n(56), n(3)), n(168));
        assert_eq!(power(n(2), n(10)), n(1024));
        assert_eq!(power(n(0), n(0)), n(1));
    }

    #[test]
    fn test_inverse_searches() {
        assert_eq!(subtract(n(145), n(22)), Some(n(123)));
        assert_eq!(subtract(n(42), n(43)), None);
        assert_eq!(divide(n(140), n(10)), Ok(Some(n(14))));
        assert_eq!(divide(n(140), n(11)), Ok(None));
        assert_eq!(divide(n(1), n(0)), Err(ArithmeticError::DivideByZero));
        assert_eq!(divide_with_remainder(n(140), n(11)), Ok((n(12), n(8))));
        assert_eq!(divide_with_remainder(n(3), n(10)), Ok((n(0), n(3))));
    }

    #[test]
    fn test_root_and_logarithm() {
        assert_eq!(root(n(4), n(16)), Ok(n(2)));
        assert_eq!(root(n(0), n(3)), Err(ArithmeticError::InvalidDegree));
        assert_eq!(logarithm(n(3), n(9)), Ok(n(2)));
        assert_eq!(logarithm(n(1), n(1)), Err(ArithmeticError::InvalidBase));
        assert_eq!(logarithm(n(0), n(0)), Err(ArithmeticError::UndefinedForZero));
    }
}
