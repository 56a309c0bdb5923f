//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use validation_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Traits**: [`Resource`], [`Validatable`], [`Validator`]
//! - **Registration**: [`ContextualRuleSet`], [`RuleRegistry`], [`RuleOptions`],
//!   [`Condition`], [`NumericBounds`]
//! - **Results**: [`ErrorSet`], [`Violation`], [`Context`], [`Value`]
//!
//! # Examples
//!
//! ```
//! use validation_rail::prelude::*;
//!
//! let mut rules = ContextualRuleSet::new();
//! let ids = rules.validates_numericalness_of(
//!     "age",
//!     NumericBounds::new().greater_than_or_equal_to(18).less_than(130),
//!     RuleOptions::new().allow_nil(true),
//! )?;
//! assert_eq!(ids.len(), 2);
//! # Ok::<(), RegistrationError>(())
//! ```

pub use crate::error::RegistrationError;
pub use crate::rules::{Condition, ContextualRuleSet, RuleOptions, RuleRegistry};
pub use crate::traits::{Resource, Validatable, Validator};
pub use crate::types::{Context, ErrorSet, Value, Violation};
pub use crate::validators::{Comparison, NumericBounds, NumericComparison};
