use std::sync::LazyLock;

use validation_rail::prelude::*;

use crate::support::{Employee, Person, REGISTRY};

#[test]
fn validate_records_violations_in_the_error_set() {
    let mut person = Person::new(31);

    let errors = person.validate(Context::DEFAULT).errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.on("age").len(), 1);
    assert_eq!(errors.full_messages(), vec!["Age must be equal to 30".to_string()]);
}

#[test]
fn is_valid_matches_an_empty_error_set() {
    let mut person = Person::new(30);
    assert!(person.is_valid(Context::DEFAULT));
    assert!(person.errors().is_empty());

    person.age = Value::from(29);
    assert!(!person.is_valid(Context::DEFAULT));
    assert!(!person.errors().is_empty());
}

#[test]
fn each_validation_starts_from_a_clean_error_set() {
    let mut person = Person::new(31);
    person.errors.add_message("name", "is reserved");

    person.validate(Context::DEFAULT);
    assert!(!person.errors().contains("name"));

    person.age = Value::from(30);
    assert!(person.validate(Context::DEFAULT).errors().is_empty());
}

#[test]
fn validating_twice_gives_the_same_errors() {
    let mut person = Person::new(-5);

    let first = person.validate("create").errors().clone();
    let second = person.validate("create").errors().clone();

    assert_eq!(first, second);
    assert_eq!(second.len(), 1);
}

#[test]
fn conditional_rule_skips_inactive_resources() {
    let mut person = Person::new(-5);
    assert!(!person.is_valid("create"));

    person.active = false;
    assert!(person.is_valid("create"));
}

#[test]
fn unknown_context_validates_cleanly() {
    let mut person = Person::new(-5);
    assert!(person.is_valid("archive"));
}

#[test]
fn default_helpers_validate_under_default() {
    let mut person = Person::new(-5);

    assert_eq!(person.validate_default().errors().len(), 1);
    assert!(!person.is_valid_default());

    person.age = Value::from(30);
    assert!(person.is_valid_default());
}

#[test]
fn resources_are_validatable() {
    assert!(Person::new(30).is_validatable());
}

#[test]
fn default_context_follows_the_rule_set_override() {
    let mut person = Person::new(-5);
    let rules = REGISTRY.rules::<Person>().unwrap();

    assert_eq!(person.default_validation_context(), Context::DEFAULT);

    rules.with_default_context("create", || {
        assert_eq!(person.default_validation_context(), Context::new("create"));

        let kinds: Vec<_> = person
            .validate(Context::DEFAULT)
            .errors()
            .iter()
            .map(|violation| violation.rule_kind().clone())
            .collect();
        assert_eq!(
            kinds,
            vec![validation_rail::RuleKind::EQUAL_TO, validation_rail::RuleKind::GREATER_THAN]
        );
    });

    assert_eq!(person.default_validation_context(), Context::DEFAULT);
}

#[test]
fn subtype_runs_inherited_rules_first() {
    let mut employee = Employee::new(31, 0);

    let attributes: Vec<_> = employee.validate(Context::DEFAULT).errors().iter().map(|v| v.attribute_name().to_string()).collect();
    assert_eq!(attributes, vec!["age".to_string(), "salary".to_string()]);

    let mut valid = Employee::new(30, 1000);
    assert!(valid.is_valid(Context::DEFAULT));
}

#[test]
fn subtype_inherits_conditional_context_rules() {
    let mut employee = Employee::new(0, 1000);
    assert_eq!(employee.validate("create").errors().on("age").len(), 1);
}

static IMPORT_RULES: LazyLock<ContextualRuleSet> = LazyLock::new(|| {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of(
            "quantity",
            NumericBounds::new().greater_than(0),
            RuleOptions::new().context("import"),
        )
        .expect("quantity rule registers");
    rules
});

/// Always treats `default` as the `import` context.
struct ImportedLine {
    quantity: i64,
    errors: ErrorSet,
}

impl Resource for ImportedLine {
    fn attribute(&self, name: &str) -> Value {
        match name {
            "quantity" => self.quantity.into(),
            _ => Value::Nil,
        }
    }
}

impl Validatable for ImportedLine {
    fn validators(&self) -> &ContextualRuleSet {
        &IMPORT_RULES
    }

    fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut ErrorSet {
        &mut self.errors
    }

    fn default_validation_context(&self) -> Context {
        Context::new("import")
    }
}

#[test]
fn overridden_default_validation_context_is_used() {
    let mut line = ImportedLine { quantity: 0, errors: ErrorSet::new() };

    assert!(!line.is_valid(Context::DEFAULT));
    assert!(line.is_valid("update"));

    line.quantity = 3;
    assert!(line.is_valid(Context::DEFAULT));
}

static AUDITED_RULES: LazyLock<ContextualRuleSet> = LazyLock::new(|| {
    let mut rules = ContextualRuleSet::new();
    rules
        .validates_numericalness_of("quantity", NumericBounds::new().less_than(100), RuleOptions::new())
        .expect("quantity rule registers");
    rules
});

/// `default` stands for `audit`; rules declared under `default` follow it.
struct AuditedLine {
    quantity: i64,
    errors: ErrorSet,
}

impl Resource for AuditedLine {
    fn attribute(&self, name: &str) -> Value {
        match name {
            "quantity" => self.quantity.into(),
            _ => Value::Nil,
        }
    }
}

impl Validatable for AuditedLine {
    fn validators(&self) -> &ContextualRuleSet {
        &AUDITED_RULES
    }

    fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    fn errors_mut(&mut self) -> &mut ErrorSet {
        &mut self.errors
    }

    fn default_validation_context(&self) -> Context {
        Context::new("audit")
    }
}

#[test]
fn default_rules_follow_an_overridden_default_validation_context() {
    let mut line = AuditedLine { quantity: 500, errors: ErrorSet::new() };

    assert!(!line.is_valid(Context::DEFAULT));
    assert!(!line.is_valid("audit"));
    assert!(line.is_valid("update"));
}
