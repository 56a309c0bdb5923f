//! Numeric comparison rules: equal to, other than, greater/less than (or equal to).

use crate::error::RegistrationError;
use crate::rules::RuleOptions;
use crate::traits::Validator;
use crate::types::alloc_type::{AttributeName, String};
use crate::types::value::Incomparable;
use crate::types::{MessageArgs, RuleKind, Value};
use core::cmp::Ordering;
use smallvec::{smallvec, SmallVec};

/// The predicate a [`NumericComparison`] applies to `value <op> bound`.
///
/// Variants are declared in the order
/// [`validates_numericalness_of`](crate::ContextualRuleSet::validates_numericalness_of)
/// registers them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Comparison {
    EqualTo,
    OtherThan,
    GreaterThan,
    GreaterThanOrEqualTo,
    LessThan,
    LessThanOrEqualTo,
}

impl Comparison {
    pub fn rule_kind(self) -> RuleKind {
        match self {
            Self::EqualTo => RuleKind::EQUAL_TO,
            Self::OtherThan => RuleKind::OTHER_THAN,
            Self::GreaterThan => RuleKind::GREATER_THAN,
            Self::GreaterThanOrEqualTo => RuleKind::GREATER_THAN_OR_EQUAL_TO,
            Self::LessThan => RuleKind::LESS_THAN,
            Self::LessThanOrEqualTo => RuleKind::LESS_THAN_OR_EQUAL_TO,
        }
    }

    /// Applies the predicate to the ordering of `value` against the bound.
    ///
    /// `None` (unordered) only satisfies [`Comparison::OtherThan`].
    pub fn holds(self, ordering: Option<Ordering>) -> bool {
        match self {
            Self::EqualTo => ordering == Some(Ordering::Equal),
            Self::OtherThan => ordering != Some(Ordering::Equal),
            Self::GreaterThan => ordering == Some(Ordering::Greater),
            Self::GreaterThanOrEqualTo => {
                matches!(ordering, Some(Ordering::Greater | Ordering::Equal))
            },
            Self::LessThan => ordering == Some(Ordering::Less),
            Self::LessThanOrEqualTo => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        }
    }
}

/// Compares an attribute against a numeric bound.
///
/// Values the comparison cannot handle (text, booleans) pass the rule instead
/// of failing it; a type mismatch is not reported as a violation. `Nil`
/// fails every comparison but [`Comparison::OtherThan`] unless the rule
/// allows nil.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use validation_rail::{Comparison, NumericComparison, RuleOptions, Validator, Value};
///
/// let rule = NumericComparison::new("age", Comparison::EqualTo, 30, RuleOptions::new()).unwrap();
///
/// let mut person = BTreeMap::new();
/// person.insert("age".to_string(), Value::from(30));
/// assert!(rule.validate_against(&person).is_none());
///
/// person.insert("age".to_string(), Value::from(31));
/// assert!(rule.validate_against(&person).is_some());
///
/// person.insert("age".to_string(), Value::from("abc"));
/// assert!(rule.validate_against(&person).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct NumericComparison {
    attribute: AttributeName,
    comparison: Comparison,
    bound: Value,
    options: RuleOptions,
}

impl NumericComparison {
    /// Fails when the attribute or contexts are unusable, or `bound` is not a
    /// number (`NaN` included).
    pub fn new(
        attribute: impl Into<AttributeName>,
        comparison: Comparison,
        bound: impl Into<Value>,
        options: RuleOptions,
    ) -> Result<Self, RegistrationError> {
        let attribute = attribute.into();
        let bound = bound.into();
        options.check(&attribute)?;

        let usable = match &bound {
            Value::Integer(_) => true,
            Value::Float(f) => !f.is_nan(),
            _ => false,
        };
        if !usable {
            return Err(RegistrationError::NonNumericBound {
                attribute: String::from(&*attribute),
                bound,
            });
        }

        Ok(Self { attribute, comparison, bound, options })
    }

    #[inline]
    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    #[inline]
    pub fn bound(&self) -> &Value {
        &self.bound
    }
}

impl Validator for NumericComparison {
    #[inline]
    fn attribute_name(&self) -> &str {
        &self.attribute
    }

    #[inline]
    fn options(&self) -> &RuleOptions {
        &self.options
    }

    #[inline]
    fn rule_kind(&self) -> RuleKind {
        self.comparison.rule_kind()
    }

    fn evaluate(&self, value: &Value) -> bool {
        match value.numeric_cmp(&self.bound) {
            Ok(ordering) => self.comparison.holds(ordering),
            Err(Incomparable) => true,
        }
    }

    fn error_message_args(&self) -> MessageArgs {
        MessageArgs {
            kind: self.rule_kind(),
            attribute: self.attribute.clone(),
            values: smallvec![self.bound.clone()],
        }
    }
}

/// Bounds for [`validates_numericalness_of`](crate::ContextualRuleSet::validates_numericalness_of).
///
/// Setting the same comparison twice keeps the last bound.
///
/// # Examples
///
/// ```
/// use validation_rail::{Comparison, NumericBounds, Value};
///
/// let bounds = NumericBounds::new().less_than(120).greater_than_or_equal_to(0);
/// let order: Vec<_> = bounds.iter().map(|(comparison, _)| *comparison).collect();
///
/// assert_eq!(order, vec![Comparison::GreaterThanOrEqualTo, Comparison::LessThan]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumericBounds {
    bounds: SmallVec<[(Comparison, Value); 2]>,
}

impl NumericBounds {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bound for `comparison`.
    pub fn with(mut self, comparison: Comparison, bound: impl Into<Value>) -> Self {
        let bound = bound.into();
        match self.bounds.iter_mut().find(|(existing, _)| *existing == comparison) {
            Some((_, slot)) => *slot = bound,
            None => {
                let at = self.bounds.partition_point(|(existing, _)| *existing < comparison);
                self.bounds.insert(at, (comparison, bound));
            },
        }
        self
    }

    #[inline]
    pub fn equal_to(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::EqualTo, bound)
    }

    #[inline]
    pub fn other_than(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::OtherThan, bound)
    }

    #[inline]
    pub fn greater_than(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::GreaterThan, bound)
    }

    #[inline]
    pub fn greater_than_or_equal_to(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::GreaterThanOrEqualTo, bound)
    }

    #[inline]
    pub fn less_than(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::LessThan, bound)
    }

    #[inline]
    pub fn less_than_or_equal_to(self, bound: impl Into<Value>) -> Self {
        self.with(Comparison::LessThanOrEqualTo, bound)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    /// Bounds in registration order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, (Comparison, Value)> {
        self.bounds.iter()
    }
}
