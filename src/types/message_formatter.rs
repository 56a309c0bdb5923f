//! Violation message formatting utilities.

use crate::types::alloc_type::{self, String, Vec};
use crate::types::value::Value;
use crate::types::violation::{Message, RuleKind, Violation};

#[cfg(not(feature = "std"))]
use alloc::{format, string::ToString};

/// Default English template for a rule kind. `{0}`, `{1}`, ... refer to the
/// message arguments in order.
pub fn default_template(kind: &RuleKind) -> &'static str {
    match kind.as_str() {
        "equal_to" => "must be equal to {0}",
        "other_than" => "must be other than {0}",
        "greater_than" => "must be greater than {0}",
        "less_than" => "must be less than {0}",
        "greater_than_or_equal_to" => "must be greater than or equal to {0}",
        "less_than_or_equal_to" => "must be less than or equal to {0}",
        _ => "is invalid",
    }
}

/// Turns `birth_year` into `Birth year`.
pub fn humanize(attribute: &str) -> String {
    let spaced = attribute.replace('_', " ");
    let mut chars = spaced.trim().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render(template: &str, args: &[Value]) -> String {
    args.iter().enumerate().fold(template.to_string(), |text, (index, arg)| {
        text.replace(&format!("{{{index}}}"), &arg.to_string())
    })
}

/// Trait for customizing how violations turn into text.
pub trait MessageFormatter {
    fn format_attribute(&self, attribute: &str) -> String {
        attribute.to_string()
    }

    fn template(&self, kind: &RuleKind) -> &str {
        default_template(kind)
    }

    fn separator(&self) -> &str {
        "; "
    }

    /// Formats the message body without the attribute prefix.
    fn format_message(&self, message: &Message) -> String {
        match message {
            Message::Text(text) => text.clone(),
            Message::Pending { kind, args } => render(self.template(kind), args),
        }
    }

    fn format_violation(&self, violation: &Violation) -> String {
        let attribute = self.format_attribute(violation.attribute_name());
        let body = self.format_message(violation.message());
        if attribute.is_empty() {
            body
        } else {
            format!("{attribute} {body}")
        }
    }

    fn format_all<'a>(&self, violations: impl Iterator<Item = &'a Violation>) -> String {
        violations
            .map(|violation| self.format_violation(violation))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based message formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageFormatConfig {
    pub humanize_attribute: bool,
    pub include_attribute: bool,
    pub separator: alloc_type::String,
}

impl Default for MessageFormatConfig {
    fn default() -> Self {
        Self { humanize_attribute: true, include_attribute: true, separator: "; ".into() }
    }
}

impl MessageFormatConfig {
    /// `Age must be equal to 30`
    #[inline]
    pub fn full() -> Self {
        Self::default()
    }

    /// `must be equal to 30`
    #[inline]
    pub fn bare() -> Self {
        Self { include_attribute: false, ..Default::default() }
    }

    /// `age must be equal to 30`
    #[inline]
    pub fn raw_attribute() -> Self {
        Self { humanize_attribute: false, ..Default::default() }
    }
}

impl MessageFormatter for MessageFormatConfig {
    fn format_attribute(&self, attribute: &str) -> String {
        match (self.include_attribute, self.humanize_attribute) {
            (false, _) => String::new(),
            (true, true) => humanize(attribute),
            (true, false) => attribute.to_string(),
        }
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}
