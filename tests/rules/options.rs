use validation_rail::rules::{ContextualRuleSet, RuleOptions};
use validation_rail::{Condition, Context, Contexts, NumericBounds, RegistrationError, Resource, Value};

use crate::support::record;

#[test]
fn options_default_to_the_default_context() {
    let contexts = RuleOptions::new().declared_contexts();

    assert!(contexts.includes(&Context::DEFAULT));
    assert!(!contexts.includes(&Context::new("create")));
}

#[test]
fn first_context_replaces_default_and_later_ones_add() {
    let contexts = RuleOptions::new().context("create").context("update").context("create").declared_contexts();

    match contexts {
        Contexts::Only(names) => {
            let names: Vec<_> = names.iter().map(Context::name).collect();
            assert_eq!(names, vec!["create", "update"]);
        },
        Contexts::All => panic!("expected named contexts"),
    }
}

#[test]
fn all_contexts_absorbs_later_named_contexts() {
    let contexts = RuleOptions::new().all_contexts().context("create").declared_contexts();
    assert_eq!(contexts, Contexts::All);
}

#[test]
fn empty_context_list_is_rejected() {
    let mut rules = ContextualRuleSet::new();
    let result = rules.validates_numericalness_of(
        "age",
        NumericBounds::new().equal_to(30),
        RuleOptions::new().contexts(Vec::<&'static str>::new()),
    );

    assert_eq!(result, Err(RegistrationError::NoContexts { attribute: "age".into() }));
    assert!(rules.is_empty());
}

#[test]
fn blank_attribute_is_rejected() {
    let mut rules = ContextualRuleSet::new();
    let result =
        rules.validates_numericalness_of("", NumericBounds::new().equal_to(30), RuleOptions::new());

    assert_eq!(result, Err(RegistrationError::EmptyAttribute));
}

#[test]
fn blank_context_name_is_rejected() {
    let mut rules = ContextualRuleSet::new();
    let result = rules.validates_numericalness_of(
        "age",
        NumericBounds::new().equal_to(30),
        RuleOptions::new().context(""),
    );

    assert_eq!(result, Err(RegistrationError::EmptyContext));
}

#[test]
fn attribute_condition_uses_truthiness() {
    let condition = Condition::attribute("active");

    assert!(condition.evaluate(&record([("active", Value::Bool(true))])));
    assert!(condition.evaluate(&record([("active", Value::from("yes"))])));
    assert!(condition.evaluate(&record([("active", Value::from(0))])));
    assert!(!condition.evaluate(&record([("active", Value::Bool(false))])));
    assert!(!condition.evaluate(&record([("active", Value::Nil)])));
    assert!(!condition.evaluate(&record([])));
}

#[test]
fn when_and_unless_must_both_allow_the_rule() {
    let options = RuleOptions::new()
        .when(Condition::attribute("active"))
        .unless(Condition::predicate(|resource: &dyn Resource| resource.attribute("locked").is_truthy()));

    let active = record([("active", Value::Bool(true))]);
    let locked = record([("active", Value::Bool(true)), ("locked", Value::Bool(true))]);
    let inactive = record([("active", Value::Bool(false))]);

    assert!(options.applies_to(&active));
    assert!(!options.applies_to(&locked));
    assert!(!options.applies_to(&inactive));
}

#[test]
fn conditions_skip_the_rule_without_a_violation() {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of(
            "age",
            NumericBounds::new().equal_to(30),
            RuleOptions::new().when(Condition::attribute("checked")),
        )
        .unwrap();
    rules
        .validates_numericalness_of(
            "age",
            NumericBounds::new().greater_than(100),
            RuleOptions::new().unless(Condition::attribute("exempt")),
        )
        .unwrap();

    let skipped = record([("age", Value::from(31)), ("exempt", Value::Bool(true))]);
    assert!(rules.validate(&skipped, &Context::DEFAULT).is_empty());

    let checked = record([("age", Value::from(31)), ("checked", Value::Bool(true))]);
    assert_eq!(rules.validate(&checked, &Context::DEFAULT).len(), 2);
}
