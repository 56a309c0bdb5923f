use crate::types::alloc_type::{AttributeName, String, Vec};
use crate::types::message_formatter::{MessageFormatConfig, MessageFormatter};
use crate::types::violation::Violation;
use crate::types::ErrorVec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Violations recorded for one resource, grouped by attribute.
///
/// Attributes keep the order in which they first received a violation, and
/// each attribute keeps its violations in insertion order. Nothing is
/// deduplicated. A fresh set holds no allocation until the first `add`.
///
/// # Examples
///
/// ```
/// use validation_rail::{ErrorSet, Violation};
///
/// let mut errors = ErrorSet::new();
/// assert!(errors.is_empty());
///
/// errors.add(Violation::text("age", "is too young"));
/// errors.add(Violation::text("age", "is too young"));
/// assert_eq!(errors.on("age").len(), 2);
/// assert!(errors.on("name").is_empty());
///
/// errors.clear();
/// assert!(errors.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorSet {
    entries: Vec<(AttributeName, ErrorVec<Violation>)>,
}

impl ErrorSet {
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Appends a violation under its attribute name.
    pub fn add(&mut self, violation: Violation) {
        match self.entries.iter_mut().find(|(name, _)| &**name == violation.attribute_name()) {
            Some((_, violations)) => violations.push(violation),
            None => {
                let name = AttributeName::from(String::from(violation.attribute_name()));
                let mut violations = ErrorVec::new();
                violations.push(violation);
                self.entries.push((name, violations));
            },
        }
    }

    /// Records resolved text against an attribute.
    #[inline]
    pub fn add_message(&mut self, attribute: impl Into<AttributeName>, text: impl Into<String>) {
        self.add(Violation::text(attribute, text));
    }

    /// Removes every violation. Calling it on an empty set does nothing.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of violations across all attributes.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, violations)| violations.len()).sum()
    }

    /// Violations recorded for `attribute`, in insertion order.
    ///
    /// Returns an empty slice when the attribute has none.
    pub fn on(&self, attribute: &str) -> &[Violation] {
        self.entries
            .iter()
            .find(|(name, _)| &**name == attribute)
            .map_or(&[][..], |(_, violations)| violations.as_slice())
    }

    #[inline]
    pub fn contains(&self, attribute: &str) -> bool {
        !self.on(attribute).is_empty()
    }

    /// Attribute names that carry at least one violation.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| &**name)
    }

    /// Every violation, attribute by attribute.
    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.entries.iter().flat_map(|(_, violations)| violations.iter())
    }

    /// One formatted line per violation using [`MessageFormatConfig::default`].
    #[inline]
    pub fn full_messages(&self) -> Vec<String> {
        self.full_messages_with(&MessageFormatConfig::default())
    }

    pub fn full_messages_with<F: MessageFormatter>(&self, formatter: &F) -> Vec<String> {
        self.iter().map(|violation| formatter.format_violation(violation)).collect()
    }
}

impl Extend<Violation> for ErrorSet {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        for violation in iter {
            self.add(violation);
        }
    }
}

impl FromIterator<Violation> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        let mut errors = Self::new();
        errors.extend(iter);
        errors
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = MessageFormatConfig::default();
        f.write_str(&config.format_all(self.iter()))
    }
}
