use crate::traits::Validator;
use crate::types::alloc_type::{Arc, Vec};
use core::slice;
use core::sync::atomic::{AtomicUsize, Ordering};

static NEXT_RULE_ID: AtomicUsize = AtomicUsize::new(0);

/// Registration stamp of a rule.
///
/// Ids grow monotonically across the whole process, so sorting by id yields
/// registration order, and a rule copied into a subtype keeps its id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleId(usize);

impl RuleId {
    #[inline]
    pub(crate) fn next() -> Self {
        Self(NEXT_RULE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A registered validator together with its registration stamp.
#[derive(Debug, Clone)]
pub struct Rule {
    id: RuleId,
    validator: Arc<dyn Validator>,
}

impl Rule {
    #[inline]
    pub(crate) fn new(id: RuleId, validator: Arc<dyn Validator>) -> Self {
        Self { id, validator }
    }

    #[inline]
    pub fn id(&self) -> RuleId {
        self.id
    }

    #[inline]
    pub fn validator(&self) -> &dyn Validator {
        &*self.validator
    }
}

/// Ordered validators registered on one type for one context.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[inline]
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    pub(crate) fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Appends the rules of `other` this set does not hold yet.
    pub(crate) fn merge(&mut self, other: &RuleSet) {
        for rule in &other.rules {
            if !self.contains(rule.id) {
                self.rules.push(rule.clone());
            }
        }
    }

    #[inline]
    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|rule| rule.id == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
