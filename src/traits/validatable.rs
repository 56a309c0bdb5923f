use crate::rules::ContextualRuleSet;
use crate::traits::Resource;
use crate::types::{Context, ErrorSet};

/// Validation behavior mixed into a resource type.
///
/// Implementors wire up where the type's rules live and where its errors are
/// kept; everything else is provided.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
/// use validation_rail::prelude::*;
///
/// static RULES: LazyLock<ContextualRuleSet> = LazyLock::new(|| {
///     let mut rules = ContextualRuleSet::new();
///     rules
///         .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
///         .expect("valid registration");
///     rules
/// });
///
/// struct Person {
///     age: i64,
///     errors: ErrorSet,
/// }
///
/// impl Resource for Person {
///     fn attribute(&self, name: &str) -> Value {
///         match name {
///             "age" => self.age.into(),
///             _ => Value::Nil,
///         }
///     }
/// }
///
/// impl Validatable for Person {
///     fn validators(&self) -> &ContextualRuleSet {
///         &RULES
///     }
///
///     fn errors(&self) -> &ErrorSet {
///         &self.errors
///     }
///
///     fn errors_mut(&mut self) -> &mut ErrorSet {
///         &mut self.errors
///     }
/// }
///
/// let mut person = Person { age: 31, errors: ErrorSet::new() };
/// assert!(!person.is_valid(Context::DEFAULT));
/// assert_eq!(person.errors().on("age").len(), 1);
///
/// person.age = 30;
/// assert!(person.is_valid(Context::DEFAULT));
/// ```
pub trait Validatable: Resource {
    /// The rule set owned by this resource's type.
    fn validators(&self) -> &ContextualRuleSet;

    fn errors(&self) -> &ErrorSet;

    fn errors_mut(&mut self) -> &mut ErrorSet;

    /// Clears the errors, runs every rule applicable under `context` and
    /// records the violations. Returns `self` for chaining into
    /// [`errors`](Validatable::errors).
    ///
    /// The `default` context resolves through
    /// [`default_validation_context`](Validatable::default_validation_context),
    /// and rules declared under `default` run whenever the resolved context is
    /// that default.
    fn validate(&mut self, context: impl Into<Context>) -> &mut Self
    where
        Self: Sized,
    {
        let requested = context.into();
        self.errors_mut().clear();

        let default_context = self.default_validation_context();
        let effective = if requested.is_default() { default_context.clone() } else { requested };
        let violations = self.validators().validate_under(&*self, &effective, &default_context);

        self.errors_mut().extend(violations);
        self
    }

    /// `true` when validating under `context` records no violation.
    #[inline]
    fn is_valid(&mut self, context: impl Into<Context>) -> bool
    where
        Self: Sized,
    {
        self.validate(context).errors().is_empty()
    }

    /// [`validate`](Validatable::validate) under `default`.
    #[inline]
    fn validate_default(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.validate(Context::DEFAULT)
    }

    /// [`is_valid`](Validatable::is_valid) under `default`.
    #[inline]
    fn is_valid_default(&mut self) -> bool
    where
        Self: Sized,
    {
        self.is_valid(Context::DEFAULT)
    }

    /// Lets graph walkers decide whether to recurse into a related object.
    #[inline]
    fn is_validatable(&self) -> bool {
        true
    }

    /// The context `default` stands for right now.
    #[inline]
    fn default_validation_context(&self) -> Context {
        self.validators().current_default_context()
    }
}
