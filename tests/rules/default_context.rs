use std::panic::{self, AssertUnwindSafe};
use std::thread;

use validation_rail::rules::{ContextualRuleSet, RuleOptions};
use validation_rail::{Context, NumericBounds, RuleKind, Value};

use crate::support::record;

fn create_only_rules() -> ContextualRuleSet {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of(
            "age",
            NumericBounds::new().equal_to(30),
            RuleOptions::new().context("create"),
        )
        .unwrap();
    rules
}

#[test]
fn current_default_context_is_default_without_override() {
    let rules = ContextualRuleSet::new();
    assert_eq!(rules.current_default_context(), Context::DEFAULT);
}

#[test]
fn default_resolves_to_the_override_inside_the_scope() {
    let rules = create_only_rules();
    let person = record([("age", Value::from(31))]);

    assert!(rules.validate(&person, &Context::DEFAULT).is_empty());

    let inside = rules.with_default_context("create", || rules.validate(&person, &Context::DEFAULT));
    assert_eq!(inside.len(), 1);

    assert!(rules.validate(&person, &Context::DEFAULT).is_empty());
    assert_eq!(rules.current_default_context(), Context::DEFAULT);
}

#[test]
fn default_rules_run_under_the_overriding_context() {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
        .unwrap();
    let person = record([("age", Value::from(31))]);

    assert_eq!(rules.validate(&person, &Context::DEFAULT).len(), 1);

    let (implicit, explicit) = rules.with_default_context("create", || {
        (rules.validate(&person, &Context::DEFAULT), rules.validate(&person, &Context::new("create")))
    });
    assert_eq!(implicit.len(), 1);
    assert_eq!(explicit.len(), 1);

    assert!(rules.validate(&person, &Context::new("create")).is_empty());
}

#[test]
fn default_and_overriding_context_rules_merge_in_registration_order() {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of(
            "age",
            NumericBounds::new().greater_than(40),
            RuleOptions::new().context("create"),
        )
        .unwrap();
    rules
        .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
        .unwrap();
    rules
        .validates_numericalness_of(
            "age",
            NumericBounds::new().less_than(10),
            RuleOptions::new().context("create").context("default"),
        )
        .unwrap();
    let person = record([("age", Value::from(31))]);

    let kinds: Vec<_> = rules
        .with_default_context("create", || rules.validate(&person, &Context::DEFAULT))
        .iter()
        .map(|violation| violation.rule_kind().clone())
        .collect();

    assert_eq!(kinds, vec![RuleKind::GREATER_THAN, RuleKind::EQUAL_TO, RuleKind::LESS_THAN]);
}

#[test]
fn default_rules_stay_out_of_other_named_contexts() {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of("age", NumericBounds::new().equal_to(30), RuleOptions::new())
        .unwrap();
    let person = record([("age", Value::from(31))]);

    let violations =
        rules.with_default_context("create", || rules.validate(&person, &Context::new("update")));
    assert!(violations.is_empty());
}

#[test]
fn named_contexts_ignore_the_override() {
    let rules = create_only_rules();
    let person = record([("age", Value::from(31))]);

    let violations =
        rules.with_default_context("update", || rules.validate(&person, &Context::new("create")));
    assert_eq!(violations.len(), 1);
}

#[test]
fn nested_overrides_restore_the_outer_one() {
    let rules = ContextualRuleSet::new();

    rules.with_default_context("create", || {
        assert_eq!(rules.current_default_context(), Context::new("create"));

        rules.with_default_context("update", || {
            assert_eq!(rules.current_default_context(), Context::new("update"));
        });

        assert_eq!(rules.current_default_context(), Context::new("create"));
    });

    assert_eq!(rules.current_default_context(), Context::DEFAULT);
}

#[test]
fn override_is_popped_when_the_scope_panics() {
    let rules = ContextualRuleSet::new();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        rules.with_default_context("create", || panic!("validation aborted"));
    }));

    assert!(outcome.is_err());
    assert_eq!(rules.current_default_context(), Context::DEFAULT);
}

#[test]
fn guard_keeps_the_override_until_dropped() {
    let rules = ContextualRuleSet::new();

    let guard = rules.override_default_context("import");
    assert_eq!(rules.current_default_context(), Context::new("import"));

    drop(guard);
    assert_eq!(rules.current_default_context(), Context::DEFAULT);
}

#[test]
fn overrides_are_scoped_to_one_rule_set() {
    let first = ContextualRuleSet::new();
    let second = ContextualRuleSet::new();

    first.with_default_context("create", || {
        assert_eq!(first.current_default_context(), Context::new("create"));
        assert_eq!(second.current_default_context(), Context::DEFAULT);
    });
}

#[test]
fn derived_rule_sets_do_not_see_the_parent_override() {
    let parent = ContextualRuleSet::new();
    let child = parent.derive();

    parent.with_default_context("create", || {
        assert_eq!(child.current_default_context(), Context::DEFAULT);
    });
}

#[test]
fn overrides_are_per_thread() {
    let rules = create_only_rules();

    rules.with_default_context("create", || {
        thread::scope(|scope| {
            let seen = scope.spawn(|| rules.current_default_context()).join().unwrap();
            assert_eq!(seen, Context::DEFAULT);
        });

        assert_eq!(rules.current_default_context(), Context::new("create"));
    });
}
