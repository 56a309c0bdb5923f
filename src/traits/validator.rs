use crate::rules::RuleOptions;
use crate::traits::Resource;
use crate::types::{Contexts, MessageArgs, RuleKind, Value, Violation};
use core::fmt::Debug;

/// A single rule check against one attribute.
///
/// Implementors supply the predicate ([`evaluate`](Validator::evaluate)) and
/// the message payload; the provided
/// [`validate_against`](Validator::validate_against) applies the shared
/// applicability rules in order:
///
/// 1. `allow_nil` with a `Nil` value skips the rule.
/// 2. a false `when` condition skips the rule.
/// 3. a true `unless` condition skips the rule.
/// 4. otherwise the predicate decides.
///
/// Validators hold no state between calls.
pub trait Validator: Debug + Send + Sync {
    fn attribute_name(&self) -> &str;

    fn options(&self) -> &RuleOptions;

    fn rule_kind(&self) -> RuleKind;

    /// Returns `true` when `value` satisfies the rule.
    fn evaluate(&self, value: &Value) -> bool;

    /// `(kind, attribute, arguments...)` used to build the violation message.
    fn error_message_args(&self) -> MessageArgs;

    /// Contexts this validator declares itself for.
    #[inline]
    fn contexts(&self) -> Contexts {
        self.options().declared_contexts()
    }

    fn validate_against(&self, resource: &dyn Resource) -> Option<Violation> {
        let value = resource.attribute(self.attribute_name());
        let options = self.options();

        if options.allows_nil() && value.is_nil() {
            return None;
        }
        if !options.applies_to(resource) {
            return None;
        }

        if self.evaluate(&value) {
            None
        } else {
            Some(Violation::from_args(self.error_message_args()))
        }
    }
}
