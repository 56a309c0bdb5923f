//! Rule registration and contextual resolution.
//!
//! # Key Components
//!
//! - [`RuleOptions`] / [`Condition`] - what every registration carries
//! - [`RuleSet`] - ordered rules for one context
//! - [`ContextualRuleSet`] - a type's rules by context, with inheritance and
//!   the scoped default-context override
//! - [`RuleRegistry`] - one rule set per host type, keyed by type identity
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use validation_rail::rules::{ContextualRuleSet, RuleOptions};
//! use validation_rail::{Context, NumericBounds, Value};
//!
//! let mut rules = ContextualRuleSet::new();
//! rules
//!     .validates_numericalness_of(
//!         "quantity",
//!         NumericBounds::new().greater_than(0),
//!         RuleOptions::new().context("create"),
//!     )
//!     .unwrap();
//!
//! let mut order = BTreeMap::new();
//! order.insert("quantity".to_string(), Value::from(0));
//!
//! assert!(rules.validate(&order, &Context::DEFAULT).is_empty());
//! let during_create = rules.with_default_context("create", || rules.validate(&order, &Context::DEFAULT));
//! assert_eq!(during_create.len(), 1);
//! ```
pub mod contextual;
#[cfg(feature = "std")]
pub mod default_context;
pub mod options;
pub mod registry;
pub mod rule_set;

pub use contextual::ContextualRuleSet;
#[cfg(feature = "std")]
pub use default_context::DefaultContextGuard;
pub use options::{Condition, RuleOptions};
pub use registry::RuleRegistry;
pub use rule_set::{Rule, RuleId, RuleSet};
