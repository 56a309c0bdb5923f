use crate::error::RegistrationError;
use crate::rules::options::RuleOptions;
use crate::rules::rule_set::{Rule, RuleId, RuleSet};
use crate::traits::{Resource, Validator};
use crate::types::alloc_type::{Arc, AttributeName, BTreeMap, Vec};
use crate::types::{Context, ContextScope, Violations};
use crate::validators::{NumericBounds, NumericComparison};
use core::fmt;
use core::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "std")]
use crate::rules::default_context::{self, DefaultContextGuard};

static NEXT_RULE_SET_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of one [`ContextualRuleSet`]; snapshots get a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RuleSetId(usize);

impl RuleSetId {
    fn next() -> Self {
        Self(NEXT_RULE_SET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Every rule registered on one type, partitioned by context.
///
/// Rules resolve in registration order. A subtype's rule set starts as a
/// snapshot of its parent's ([`derive`](ContextualRuleSet::derive) or
/// [`inherited`](ContextualRuleSet::inherited)), so inherited rules always run
/// before the subtype's own, and later parent registrations never reach the
/// subtype.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use validation_rail::{Context, ContextualRuleSet, NumericBounds, RuleOptions, Value};
///
/// let mut rules = ContextualRuleSet::new();
/// rules
///     .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
///     .unwrap();
///
/// let mut person = BTreeMap::new();
/// person.insert("age".to_string(), Value::from(31));
///
/// let violations = rules.validate(&person, &Context::DEFAULT);
/// assert_eq!(violations.len(), 1);
/// assert!(rules.validate(&person, &Context::new("create")).is_empty());
/// ```
pub struct ContextualRuleSet {
    #[cfg_attr(not(feature = "std"), allow(dead_code))]
    id: RuleSetId,
    by_context: BTreeMap<Context, RuleSet>,
    universal: RuleSet,
}

impl ContextualRuleSet {
    pub fn new() -> Self {
        Self { id: RuleSetId::next(), by_context: BTreeMap::new(), universal: RuleSet::new() }
    }

    /// Snapshot of this rule set, as the starting point for a subtype.
    pub fn derive(&self) -> Self {
        let mut child = Self::new();
        self.inherited(&mut child);
        child
    }

    /// Copies every context entry into `child`.
    ///
    /// Rules `child` already holds are kept once; nothing is removed.
    pub fn inherited(&self, child: &mut ContextualRuleSet) {
        for (context, rules) in &self.by_context {
            child.by_context.entry(context.clone()).or_default().merge(rules);
        }
        child.universal.merge(&self.universal);
    }

    /// Appends `validator` under one context, or under every context for
    /// [`ContextScope::All`].
    pub fn add_rule(
        &mut self,
        scope: impl Into<ContextScope>,
        validator: Arc<dyn Validator>,
    ) -> Result<RuleId, RegistrationError> {
        let scope = scope.into();
        if validator.attribute_name().is_empty() {
            return Err(RegistrationError::EmptyAttribute);
        }
        if let ContextScope::Named(context) = &scope {
            if context.name().is_empty() {
                return Err(RegistrationError::EmptyContext);
            }
        }

        let id = RuleId::next();
        self.insert(&scope, Rule::new(id, validator));
        Ok(id)
    }

    /// Registers `validator` under every context its options declare.
    ///
    /// A validator declared for several contexts is stored once per context
    /// but shares one [`RuleId`].
    pub fn add<V>(&mut self, validator: V) -> Result<RuleId, RegistrationError>
    where
        V: Validator + 'static,
    {
        validator.options().check(validator.attribute_name())?;

        let scopes = validator.contexts().scopes();
        let rule = Rule::new(RuleId::next(), Arc::new(validator));
        for scope in &scopes {
            self.insert(scope, rule.clone());
        }

        Ok(rule.id())
    }

    /// Registers one numeric comparison per bound in `bounds`.
    ///
    /// Every bound is checked before anything is registered, so a rejected
    /// call leaves the rule set untouched.
    pub fn validates_numericalness_of(
        &mut self,
        attribute: impl Into<AttributeName>,
        bounds: NumericBounds,
        options: RuleOptions,
    ) -> Result<Vec<RuleId>, RegistrationError> {
        let attribute = attribute.into();
        if bounds.is_empty() {
            options.check(&attribute)?;
            return Err(RegistrationError::NoBounds { attribute: attribute.into_owned() });
        }

        let validators = bounds
            .iter()
            .map(|(comparison, bound)| {
                NumericComparison::new(
                    attribute.clone(),
                    *comparison,
                    bound.clone(),
                    options.clone(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        validators.into_iter().map(|validator| self.add(validator)).collect()
    }

    fn insert(&mut self, scope: &ContextScope, rule: Rule) {
        #[cfg(feature = "tracing")]
        tracing::trace!(
            attribute = rule.validator().attribute_name(),
            kind = %rule.validator().rule_kind(),
            scope = ?scope,
            "registered validation rule"
        );

        match scope {
            ContextScope::All => self.universal.push(rule),
            ContextScope::Named(context) => {
                self.by_context.entry(context.clone()).or_default().push(rule)
            },
        }
    }

    /// What `default` resolves to on this thread right now.
    pub fn current_default_context(&self) -> Context {
        #[cfg(feature = "std")]
        let overridden = default_context::current(self.id);
        #[cfg(not(feature = "std"))]
        let overridden: Option<Context> = None;

        overridden.unwrap_or(Context::DEFAULT)
    }

    /// Runs `f` with `default` resolving to `context` for this rule set.
    ///
    /// The previous default is restored when `f` returns or unwinds.
    ///
    /// # Examples
    ///
    /// ```
    /// use validation_rail::{Context, ContextualRuleSet};
    ///
    /// let rules = ContextualRuleSet::new();
    /// let inside = rules.with_default_context("create", || rules.current_default_context());
    ///
    /// assert_eq!(inside, Context::new("create"));
    /// assert_eq!(rules.current_default_context(), Context::DEFAULT);
    /// ```
    #[cfg(feature = "std")]
    pub fn with_default_context<R>(&self, context: impl Into<Context>, f: impl FnOnce() -> R) -> R {
        let _guard = self.override_default_context(context);
        f()
    }

    /// Starts a default-context override that lasts until the guard drops.
    #[cfg(feature = "std")]
    pub fn override_default_context(&self, context: impl Into<Context>) -> DefaultContextGuard {
        default_context::push(self.id, context.into())
    }

    /// Maps `default` to the current default context; other names pass through.
    pub fn resolve_context(&self, requested: &Context) -> Context {
        if requested.is_default() {
            self.current_default_context()
        } else {
            requested.clone()
        }
    }

    /// Evaluates every rule applicable under `context` against `resource`.
    ///
    /// `default` is first resolved through the default-context override.
    /// The resource is only read; recording the violations is up to the caller.
    pub fn validate(&self, resource: &dyn Resource, context: &Context) -> Violations {
        let effective = self.resolve_context(context);
        self.validate_in(resource, &effective)
    }

    /// Like [`validate`](ContextualRuleSet::validate) with an already resolved context.
    ///
    /// Rules declared under `default` still run when `effective` is what
    /// `default` currently stands for.
    pub fn validate_in(&self, resource: &dyn Resource, effective: &Context) -> Violations {
        self.validate_under(resource, effective, &self.current_default_context())
    }

    /// Evaluates the rules applicable under `effective`, treating
    /// `default_context` as the context `default` stands for.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use validation_rail::{Context, ContextualRuleSet, NumericBounds, RuleOptions, Value};
    ///
    /// let mut rules = ContextualRuleSet::new();
    /// rules
    ///     .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
    ///     .unwrap();
    ///
    /// let mut person = BTreeMap::new();
    /// person.insert("age".to_string(), Value::from(31));
    ///
    /// let import = Context::new("import");
    /// assert_eq!(rules.validate_under(&person, &import, &import).len(), 1);
    /// assert!(rules.validate_under(&person, &import, &Context::DEFAULT).is_empty());
    /// ```
    pub fn validate_under(
        &self,
        resource: &dyn Resource,
        effective: &Context,
        default_context: &Context,
    ) -> Violations {
        let rules = self.rules_resolved(effective, default_context);
        let violations: Violations =
            rules.iter().filter_map(|rule| rule.validator().validate_against(resource)).collect();

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                context = %effective,
                default_context = %default_context,
                rules = rules.len(),
                violations = violations.len(),
                "validated resource"
            );
            for violation in &violations {
                tracing::trace!(
                    attribute = violation.attribute_name(),
                    kind = %violation.rule_kind(),
                    "rule violated"
                );
            }
        }

        violations
    }

    /// Rules applicable under `context`, each once, in registration order.
    ///
    /// `context` is taken as is; `default` is not resolved here.
    pub fn rules_for(&self, context: &Context) -> Vec<&Rule> {
        self.collect_rules(&[context])
    }

    /// Rules applicable under `effective` when `default` stands for
    /// `default_context`.
    pub fn rules_resolved(&self, effective: &Context, default_context: &Context) -> Vec<&Rule> {
        if effective == default_context && !effective.is_default() {
            self.collect_rules(&[effective, &Context::DEFAULT])
        } else {
            self.collect_rules(&[effective])
        }
    }

    fn collect_rules(&self, contexts: &[&Context]) -> Vec<&Rule> {
        let mut rules: Vec<&Rule> = contexts
            .iter()
            .filter_map(|context| self.by_context.get(*context))
            .flat_map(RuleSet::iter)
            .chain(self.universal.iter())
            .collect();

        rules.sort_by_key(|rule| rule.id());
        rules.dedup_by_key(|rule| rule.id());
        rules
    }

    /// Contexts with at least one rule declared by name.
    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.by_context.iter().filter(|(_, rules)| !rules.is_empty()).map(|(context, _)| context)
    }

    /// `true` when at least one rule applies under `context`.
    #[inline]
    pub fn is_valid_context(&self, context: &Context) -> bool {
        !self.rules_for(context).is_empty()
    }

    pub fn assert_valid_context(&self, context: &Context) -> Result<(), RegistrationError> {
        if self.is_valid_context(context) {
            Ok(())
        } else {
            Err(RegistrationError::UnknownContext { context: context.clone() })
        }
    }

    /// Number of distinct rules, however many contexts each is stored under.
    pub fn len(&self) -> usize {
        let mut ids: Vec<RuleId> = self
            .by_context
            .values()
            .flat_map(RuleSet::iter)
            .chain(self.universal.iter())
            .map(Rule::id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.universal.is_empty() && self.by_context.values().all(RuleSet::is_empty)
    }
}

impl Default for ContextualRuleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Cloning takes a snapshot with its own identity; overrides active on the
/// original do not apply to the clone.
impl Clone for ContextualRuleSet {
    fn clone(&self) -> Self {
        self.derive()
    }
}

impl fmt::Debug for ContextualRuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextualRuleSet")
            .field("by_context", &self.by_context)
            .field("universal", &self.universal)
            .finish()
    }
}
