use crate::error::RegistrationError;
use crate::traits::Resource;
use crate::types::alloc_type::{Arc, AttributeName, String};
use crate::types::{Context, Contexts};
use core::fmt;
use smallvec::smallvec;

type PredicateFn = dyn Fn(&dyn Resource) -> bool + Send + Sync;

/// Applicability test evaluated against the live resource.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use validation_rail::{Condition, Value};
///
/// let mut account = BTreeMap::new();
/// account.insert("active".to_string(), Value::Bool(false));
///
/// assert!(!Condition::attribute("active").evaluate(&account));
/// assert!(Condition::predicate(|r| !r.attribute("active").is_nil()).evaluate(&account));
/// ```
#[derive(Clone)]
pub enum Condition {
    /// Reads the named attribute and tests its truthiness.
    Attribute(AttributeName),
    Predicate(Arc<PredicateFn>),
}

impl Condition {
    #[inline]
    pub fn attribute(name: impl Into<AttributeName>) -> Self {
        Self::Attribute(name.into())
    }

    #[inline]
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&dyn Resource) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    pub fn evaluate(&self, resource: &dyn Resource) -> bool {
        match self {
            Self::Attribute(name) => resource.attribute(name).is_truthy(),
            Self::Predicate(predicate) => predicate(resource),
        }
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Attribute(name) => f.debug_tuple("Attribute").field(name).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Options every rule registration accepts.
///
/// Without an explicit context the rule lands in `default`. The first call to
/// [`context`](RuleOptions::context) replaces that default; later calls add
/// to it.
///
/// # Examples
///
/// ```
/// use validation_rail::{Condition, Context, RuleOptions};
///
/// let options = RuleOptions::new()
///     .context("create")
///     .context("update")
///     .when(Condition::attribute("active"))
///     .allow_nil(true);
///
/// let contexts = options.declared_contexts();
/// assert!(contexts.includes(&Context::new("update")));
/// assert!(!contexts.includes(&Context::DEFAULT));
/// assert!(options.allows_nil());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleOptions {
    contexts: Option<Contexts>,
    when: Option<Condition>,
    unless: Option<Condition>,
    allow_nil: bool,
}

impl RuleOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `context` to the contexts the rule applies under.
    pub fn context(mut self, context: impl Into<Context>) -> Self {
        let context = context.into();
        self.contexts = Some(match self.contexts.take() {
            None => Contexts::Only(smallvec![context]),
            Some(Contexts::Only(mut names)) => {
                if !names.contains(&context) {
                    names.push(context);
                }
                Contexts::Only(names)
            },
            Some(Contexts::All) => Contexts::All,
        });
        self
    }

    /// Replaces the declared contexts. An empty list is rejected at registration.
    pub fn contexts<I, C>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Context>,
    {
        self.contexts = Some(Contexts::Only(contexts.into_iter().map(Into::into).collect()));
        self
    }

    /// Makes the rule apply under every context.
    #[inline]
    pub fn all_contexts(mut self) -> Self {
        self.contexts = Some(Contexts::All);
        self
    }

    /// Only run the rule when `condition` holds.
    #[inline]
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = Some(condition);
        self
    }

    /// Skip the rule when `condition` holds.
    #[inline]
    pub fn unless(mut self, condition: Condition) -> Self {
        self.unless = Some(condition);
        self
    }

    #[inline]
    pub fn allow_nil(mut self, allow_nil: bool) -> Self {
        self.allow_nil = allow_nil;
        self
    }

    #[inline]
    pub fn declared_contexts(&self) -> Contexts {
        self.contexts.clone().unwrap_or_default()
    }

    #[inline]
    pub fn when_condition(&self) -> Option<&Condition> {
        self.when.as_ref()
    }

    #[inline]
    pub fn unless_condition(&self) -> Option<&Condition> {
        self.unless.as_ref()
    }

    #[inline]
    pub fn allows_nil(&self) -> bool {
        self.allow_nil
    }

    /// Both conditions pass: `when` is absent or true, `unless` is absent or false.
    pub fn applies_to(&self, resource: &dyn Resource) -> bool {
        let when = self.when.as_ref().map_or(true, |condition| condition.evaluate(resource));
        when && !self.unless.as_ref().is_some_and(|condition| condition.evaluate(resource))
    }

    /// Rejects options that would make a rule unreachable.
    pub(crate) fn check(&self, attribute: &str) -> Result<(), RegistrationError> {
        if attribute.is_empty() {
            return Err(RegistrationError::EmptyAttribute);
        }

        match &self.contexts {
            Some(Contexts::Only(names)) if names.is_empty() => {
                Err(RegistrationError::NoContexts { attribute: String::from(attribute) })
            },
            Some(Contexts::Only(names)) if names.iter().any(|name| name.name().is_empty()) => {
                Err(RegistrationError::EmptyContext)
            },
            _ => Ok(()),
        }
    }
}
