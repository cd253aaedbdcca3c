//! Field rules and step schemas.
//!
//! A check is a pure predicate over `(field value, step record)`. Checks of a
//! field run in the order they were declared and every failure is recorded;
//! the first one is what a form displays.

use regex::Regex;
use regform_core::{Input, Step};
use tracing::debug;

use crate::result::{ErrorKind, FieldError, FieldOutcome, ValidationResult};

type Predicate<R> = Box<dyn Fn(&R) -> bool + Send + Sync>;

/// A single predicate with the error it produces when it does not hold.
pub struct Check<R> {
    kind: ErrorKind,
    message: String,
    passes: Predicate<R>,
}

impl<R> Check<R> {
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    fn run(&self, record: &R) -> Option<FieldError> {
        if (self.passes)(record) {
            None
        } else {
            Some(FieldError::new(self.kind, self.message.clone()))
        }
    }
}

/// The ordered checks of one field.
pub struct FieldRule<R> {
    field: &'static str,
    checks: Vec<Check<R>>,
}

impl<R> FieldRule<R> {
    pub fn field(&self) -> &'static str {
        self.field
    }

    pub fn checks(&self) -> &[Check<R>] {
        &self.checks
    }

    /// Run every check against `record`.
    pub fn evaluate(&self, record: &R) -> FieldOutcome {
        FieldOutcome {
            field: self.field.to_string(),
            errors: self
                .checks
                .iter()
                .filter_map(|check| check.run(record))
                .collect(),
        }
    }
}

/// Start a rule for `name`, reading its value from the step record with `value`.
pub fn field<R: 'static, V: 'static>(
    name: &'static str,
    value: fn(&R) -> &V,
) -> FieldRuleBuilder<R, V> {
    FieldRuleBuilder {
        field: name,
        value,
        checks: Vec::new(),
    }
}

pub struct FieldRuleBuilder<R, V> {
    field: &'static str,
    value: fn(&R) -> &V,
    checks: Vec<Check<R>>,
}

impl<R: 'static, V: 'static> FieldRuleBuilder<R, V> {
    /// Append a check. `test` receives the field value and the whole step
    /// record, so it may read sibling fields.
    pub fn check<F>(mut self, kind: ErrorKind, message: impl Into<String>, test: F) -> Self
    where
        F: Fn(&V, &R) -> bool + Send + Sync + 'static,
    {
        let value = self.value;
        self.checks.push(Check {
            kind,
            message: message.into(),
            passes: Box::new(move |record| test(value(record), record)),
        });
        self
    }

    pub fn build(self) -> FieldRule<R> {
        FieldRule {
            field: self.field,
            checks: self.checks,
        }
    }
}

impl<R: 'static> FieldRuleBuilder<R, Input<String>> {
    /// Fails on missing, empty or malformed text.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(ErrorKind::Required, message, |value, _| value.has_text())
    }

    /// Fails when supplied text does not match `pattern`. Missing text passes;
    /// the empty string is tested like any other value.
    pub fn matches(self, pattern: &Regex, message: impl Into<String>) -> Self {
        let pattern = pattern.clone();
        self.check(ErrorKind::PatternMismatch, message, move |value, _| {
            match value {
                Input::Missing => true,
                Input::Present(text) => pattern.is_match(text),
                Input::Malformed(_) => false,
            }
        })
    }

    /// Fails when supplied text is not one of `allowed`. Missing text passes.
    pub fn one_of(self, allowed: &'static [&'static str], message: impl Into<String>) -> Self {
        self.check(ErrorKind::NotInEnumeratedSet, message, move |value, _| {
            match value {
                Input::Missing => true,
                Input::Present(text) => allowed.contains(&text.as_str()),
                Input::Malformed(_) => false,
            }
        })
    }
}

impl<R: 'static> FieldRuleBuilder<R, Input<i64>> {
    /// Fails unless a readable integer was supplied.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(ErrorKind::Required, message, |value, _| value.is_present())
    }

    pub fn at_least(self, min: i64, message: impl Into<String>) -> Self {
        self.check(ErrorKind::OutOfRange, message, move |value, _| {
            value.present().is_none_or(|number| *number >= min)
        })
    }

    pub fn at_most(self, max: i64, message: impl Into<String>) -> Self {
        self.check(ErrorKind::OutOfRange, message, move |value, _| {
            value.present().is_none_or(|number| *number <= max)
        })
    }

    /// Fails when a supplied integer is not in `allowed`.
    pub fn member_of(self, allowed: Vec<i64>, message: impl Into<String>) -> Self {
        self.check(ErrorKind::NotInEnumeratedSet, message, move |value, _| {
            value.present().is_none_or(|number| allowed.contains(number))
        })
    }
}

impl<R: 'static> FieldRuleBuilder<R, Input<bool>> {
    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(ErrorKind::Required, message, |value, _| value.is_present())
    }
}

impl<R: 'static> FieldRuleBuilder<R, Input<Vec<String>>> {
    /// Fails unless a readable list was supplied. An empty list passes.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(ErrorKind::Required, message, |value, _| value.is_present())
    }

    /// Fails when a supplied list has fewer than `min` elements.
    pub fn min_len(self, min: usize, message: impl Into<String>) -> Self {
        self.check(ErrorKind::OutOfRange, message, move |value, _| {
            value.present().is_none_or(|items| items.len() >= min)
        })
    }

    /// Fails when any element does not match `pattern`. Missing and empty lists pass.
    pub fn each_matches(self, pattern: &Regex, message: impl Into<String>) -> Self {
        let pattern = pattern.clone();
        self.check(ErrorKind::PatternMismatch, message, move |value, _| {
            match value {
                Input::Missing => true,
                Input::Present(items) => items.iter().all(|item| pattern.is_match(item)),
                Input::Malformed(_) => false,
            }
        })
    }
}

/// The field rules of one step, in display order.
pub struct StepSchema<R> {
    step: Step,
    rules: Vec<FieldRule<R>>,
}

impl<R> StepSchema<R> {
    pub fn new(step: Step, rules: Vec<FieldRule<R>>) -> Self {
        Self { step, rules }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(FieldRule::field)
    }

    pub fn rule(&self, field: &str) -> Option<&FieldRule<R>> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    /// Evaluate every field rule; one field's failure never skips another field.
    pub fn evaluate(&self, record: &R) -> ValidationResult {
        let mut result = ValidationResult::new(self.step);
        for rule in &self.rules {
            result.push(rule.evaluate(record));
        }

        debug!(
            step = self.step.number(),
            fields = result.fields.len(),
            failures = result.error_count(),
            "step evaluated"
        );
        result
    }
}
