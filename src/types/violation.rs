//! The record produced when a rule fails.

use crate::types::alloc_type::{AttributeName, Cow, String};
use crate::types::value::Value;
use core::fmt;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies which predicate produced a [`Violation`].
///
/// Built-in kinds are exposed as associated constants; external validators
/// may mint their own with [`RuleKind::new`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleKind(Cow<'static, str>);

impl RuleKind {
    pub const EQUAL_TO: RuleKind = RuleKind::from_static("equal_to");
    pub const OTHER_THAN: RuleKind = RuleKind::from_static("other_than");
    pub const GREATER_THAN: RuleKind = RuleKind::from_static("greater_than");
    pub const LESS_THAN: RuleKind = RuleKind::from_static("less_than");
    pub const GREATER_THAN_OR_EQUAL_TO: RuleKind =
        RuleKind::from_static("greater_than_or_equal_to");
    pub const LESS_THAN_OR_EQUAL_TO: RuleKind = RuleKind::from_static("less_than_or_equal_to");
    /// Kind attached to messages added by hand through [`ErrorSet::add_message`](crate::ErrorSet::add_message).
    pub const CUSTOM: RuleKind = RuleKind::from_static("custom");

    #[inline]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload a validator hands over to build a violation's message later.
///
/// Mirrors `(kind, attribute, bound...)`; formatting into text is deferred to
/// a [`MessageFormatter`](crate::types::message_formatter::MessageFormatter).
#[derive(Debug, Clone, PartialEq)]
pub struct MessageArgs {
    pub kind: RuleKind,
    pub attribute: AttributeName,
    pub values: SmallVec<[Value; 1]>,
}

/// Error text, either already resolved or kept as a kind plus arguments.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text(String),
    Pending { kind: RuleKind, args: SmallVec<[Value; 1]> },
}

/// One failed rule application.
///
/// Violations are immutable: once built, only accessors are available.
///
/// # Examples
///
/// ```
/// use validation_rail::{Message, RuleKind, Violation};
///
/// let violation = Violation::text("name", "is reserved");
/// assert_eq!(violation.attribute_name(), "name");
/// assert_eq!(violation.rule_kind(), &RuleKind::CUSTOM);
/// assert_eq!(violation.message(), &Message::Text("is reserved".into()));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    attribute_name: AttributeName,
    message: Message,
    rule_kind: RuleKind,
}

impl Violation {
    #[inline]
    pub fn new(
        attribute_name: impl Into<AttributeName>,
        rule_kind: RuleKind,
        message: Message,
    ) -> Self {
        Self { attribute_name: attribute_name.into(), message, rule_kind }
    }

    /// Builds a violation whose message stays unformatted.
    pub fn from_args(args: MessageArgs) -> Self {
        let MessageArgs { kind, attribute, values } = args;
        Self {
            attribute_name: attribute,
            message: Message::Pending { kind: kind.clone(), args: values },
            rule_kind: kind,
        }
    }

    /// Builds a violation with resolved text and the [`RuleKind::CUSTOM`] kind.
    #[inline]
    pub fn text(attribute_name: impl Into<AttributeName>, text: impl Into<String>) -> Self {
        Self::new(attribute_name, RuleKind::CUSTOM, Message::Text(text.into()))
    }

    #[inline]
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    #[inline]
    pub fn message(&self) -> &Message {
        &self.message
    }

    #[inline]
    pub fn rule_kind(&self) -> &RuleKind {
        &self.rule_kind
    }
}
