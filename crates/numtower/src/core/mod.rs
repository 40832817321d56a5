//! Shared vocabulary of the tower.
//!
//! - [`error`]: `ArithmeticError`, `ParseError` and the `Operation` names
//! - [`promotion`]: `Difference` and `Quotient`, the tagged results of partial operations
//! - [`traits`]: the `Successor` primitive and the per-system operation sets

pub mod error;
pub mod promotion;
pub mod traits;
