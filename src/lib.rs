//! Contextual rule engine for validating resources.
//!
//! Each host type owns a [`ContextualRuleSet`]: validators registered per
//! context (`default`, `create`, `update`, ...). Validating a resource under a
//! context runs every applicable rule against the resource's current attribute
//! values and records the failures in its [`ErrorSet`].
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `validation_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Contexts
//!
//! ```
//! use std::collections::BTreeMap;
//! use validation_rail::{Context, ContextualRuleSet, NumericBounds, RuleOptions, Value};
//!
//! let mut rules = ContextualRuleSet::new();
//! rules
//!     .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
//!     .unwrap();
//! rules
//!     .validates_numericalness_of(
//!         "stock",
//!         NumericBounds::new().greater_than(0),
//!         RuleOptions::new().context("create"),
//!     )
//!     .unwrap();
//!
//! let mut record = BTreeMap::new();
//! record.insert("age".to_string(), Value::from(31));
//! record.insert("stock".to_string(), Value::from(0));
//!
//! assert_eq!(rules.validate(&record, &Context::DEFAULT).len(), 1);
//! assert_eq!(rules.validate(&record, &Context::new("create")).len(), 1);
//! assert!(rules.validate(&record, &Context::new("update")).is_empty());
//! ```
//!
//! ## Inheritance
//!
//! ```
//! use validation_rail::{NumericBounds, RuleOptions, RuleRegistry};
//!
//! struct Vehicle;
//! struct Truck;
//!
//! let mut registry = RuleRegistry::new();
//! registry
//!     .define::<Vehicle>()?
//!     .validates_numericalness_of("wheels", NumericBounds::new().greater_than(0), RuleOptions::new())?;
//! registry
//!     .define_subtype::<Truck, Vehicle>()?
//!     .validates_numericalness_of("payload", NumericBounds::new().less_than(40), RuleOptions::new())?;
//!
//! // Rules added to the parent afterwards stay on the parent.
//! registry
//!     .rules_mut::<Vehicle>()
//!     .unwrap()
//!     .validates_numericalness_of("doors", NumericBounds::new().less_than(6), RuleOptions::new())?;
//!
//! assert_eq!(registry.rules::<Vehicle>().unwrap().len(), 2);
//! assert_eq!(registry.rules::<Truck>().unwrap().len(), 2);
//! # Ok::<(), validation_rail::RegistrationError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Setup-time error type
pub mod error;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule registration, contextual resolution and the type registry
pub mod rules;
/// Seams to host objects and rule kinds
pub mod traits;
/// Values, contexts, violations and the error set
pub mod types;
/// Built-in rule kinds
pub mod validators;

pub use error::RegistrationError;
pub use rules::{Condition, ContextualRuleSet, RuleOptions, RuleRegistry};
pub use traits::*;
pub use types::{
    Context, ContextScope, Contexts, ErrorSet, ErrorVec, Message, MessageArgs, MessageFormatConfig,
    MessageFormatter, RuleKind, Value, Violation, Violations,
};
pub use validators::*;
