use crate::error::RegistrationError;
use crate::rules::contextual::ContextualRuleSet;
use crate::types::alloc_type::BTreeMap;
use core::any::{type_name, TypeId};

#[derive(Debug)]
struct Entry {
    type_name: &'static str,
    parent: Option<&'static str>,
    rules: ContextualRuleSet,
}

/// Owns one [`ContextualRuleSet`] per host type, keyed by type identity.
///
/// Built once during setup, then read. Deriving a subtype copies the parent's
/// rules as they are at that moment.
///
/// # Examples
///
/// ```
/// use validation_rail::{NumericBounds, RuleOptions, RuleRegistry};
///
/// struct Person;
/// struct Employee;
///
/// let mut registry = RuleRegistry::new();
/// registry
///     .define::<Person>()?
///     .validates_numericalness_of("age", NumericBounds::new().greater_than(0), RuleOptions::new())?;
/// registry
///     .define_subtype::<Employee, Person>()?
///     .validates_numericalness_of("salary", NumericBounds::new().greater_than(0), RuleOptions::new())?;
///
/// assert_eq!(registry.rules::<Person>().map(|rules| rules.len()), Some(1));
/// assert_eq!(registry.rules::<Employee>().map(|rules| rules.len()), Some(2));
/// # Ok::<(), validation_rail::RegistrationError>(())
/// ```
#[derive(Debug, Default)]
pub struct RuleRegistry {
    entries: BTreeMap<TypeId, Entry>,
}

impl RuleRegistry {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty rule set for `T`.
    pub fn define<T: 'static>(&mut self) -> Result<&mut ContextualRuleSet, RegistrationError> {
        self.insert::<T>(None, ContextualRuleSet::new())
    }

    /// Creates the rule set for `T` as a snapshot of `Parent`'s.
    pub fn define_subtype<T: 'static, Parent: 'static>(
        &mut self,
    ) -> Result<&mut ContextualRuleSet, RegistrationError> {
        let parent = self
            .entries
            .get(&TypeId::of::<Parent>())
            .ok_or(RegistrationError::UnknownParent { type_name: type_name::<Parent>() })?;
        let rules = parent.rules.derive();
        let parent_name = parent.type_name;

        self.insert::<T>(Some(parent_name), rules)
    }

    fn insert<T: 'static>(
        &mut self,
        parent: Option<&'static str>,
        rules: ContextualRuleSet,
    ) -> Result<&mut ContextualRuleSet, RegistrationError> {
        let type_name = type_name::<T>();
        if self.entries.contains_key(&TypeId::of::<T>()) {
            return Err(RegistrationError::AlreadyDefined { type_name });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(type_name, parent, inherited = rules.len(), "defined rule set");

        let entry = self.entries.entry(TypeId::of::<T>()).or_insert(Entry { type_name, parent, rules });
        Ok(&mut entry.rules)
    }

    pub fn rules<T: 'static>(&self) -> Option<&ContextualRuleSet> {
        self.entries.get(&TypeId::of::<T>()).map(|entry| &entry.rules)
    }

    pub fn rules_mut<T: 'static>(&mut self) -> Option<&mut ContextualRuleSet> {
        self.entries.get_mut(&TypeId::of::<T>()).map(|entry| &mut entry.rules)
    }

    /// Type name of the parent `T` was derived from, if any.
    pub fn parent_of<T: 'static>(&self) -> Option<&'static str> {
        self.entries.get(&TypeId::of::<T>()).and_then(|entry| entry.parent)
    }

    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
