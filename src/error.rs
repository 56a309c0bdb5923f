//! Setup-time failures.
//!
//! Validation never fails: broken data becomes [`Violation`](crate::Violation)s.
//! A broken *registration* is reported here, at the moment it is made, so a
//! misconfigured rule cannot silently disappear.

use crate::types::alloc_type::String;
use crate::types::{Context, Value};
use core::fmt;

/// Reasons a rule, context or type registration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    /// A rule was declared without an attribute name.
    EmptyAttribute,
    /// A context name was blank.
    EmptyContext,
    /// The rule was restricted to an empty list of contexts.
    NoContexts { attribute: String },
    /// A numeric rule was given a bound that cannot be compared numerically.
    NonNumericBound { attribute: String, bound: Value },
    /// A numeric registration named no bounds at all.
    NoBounds { attribute: String },
    /// The type already owns a rule set in the registry.
    AlreadyDefined { type_name: &'static str },
    /// A subtype was derived from a type the registry does not know.
    UnknownParent { type_name: &'static str },
    /// No rule is declared for the context.
    UnknownContext { context: Context },
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAttribute => f.write_str("rule declared without an attribute name"),
            Self::EmptyContext => f.write_str("context name must not be empty"),
            Self::NoContexts { attribute } => {
                write!(f, "rule on `{attribute}` is restricted to an empty set of contexts")
            },
            Self::NonNumericBound { attribute, bound } => write!(
                f,
                "numeric rule on `{attribute}` needs a numeric bound, got {} `{bound}`",
                bound.type_name()
            ),
            Self::NoBounds { attribute } => {
                write!(f, "numericalness rule on `{attribute}` declares no bounds")
            },
            Self::AlreadyDefined { type_name } => {
                write!(f, "`{type_name}` already has a rule set")
            },
            Self::UnknownParent { type_name } => {
                write!(f, "`{type_name}` has no rule set to inherit from")
            },
            Self::UnknownContext { context } => {
                write!(f, "no rule is declared for context `{context}`")
            },
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RegistrationError {}
