//! Value types shared by the rule engine.
//!
//! This module holds the data the engine produces and consumes: attribute
//! [`Value`]s, validation [`Context`] names, [`Violation`] records and the
//! per-resource [`ErrorSet`].
//!
//! # Examples
//!
//! ```
//! use validation_rail::types::{ErrorSet, MessageArgs, RuleKind, Value, Violation};
//!
//! let mut errors = ErrorSet::new();
//! errors.add(Violation::from_args(MessageArgs {
//!     kind: RuleKind::EQUAL_TO,
//!     attribute: "age".into(),
//!     values: [Value::from(30)].into_iter().collect(),
//! }));
//!
//! assert_eq!(errors.full_messages(), vec!["Age must be equal to 30".to_string()]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod context;
pub mod error_set;
pub mod message_formatter;
pub mod value;
pub mod violation;

pub use context::*;
pub use error_set::*;
pub use message_formatter::*;
pub use value::*;
pub use violation::*;

/// SmallVec-backed collection used for grouping violations per attribute.
///
/// Uses inline storage for one element; most attributes fail at most one rule.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Violations returned by a single rule-set evaluation, in evaluation order.
pub type Violations = alloc_type::Vec<Violation>;
