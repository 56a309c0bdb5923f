//! Built-in rule kinds.
//!
//! Only the numeric comparison family ships with the crate; other rule kinds
//! plug in by implementing [`Validator`](crate::traits::Validator).

pub mod numericalness;

pub use numericalness::{Comparison, NumericBounds, NumericComparison};
