use std::collections::BTreeMap;
use std::fmt;

use regform_core::Step;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Why a field check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Value does not match the field's pattern (or is not a usable value at all).
    PatternMismatch,
    /// Value is missing, empty or unreadable.
    Required,
    /// Number outside its allowed bounds.
    OutOfRange,
    /// Value is not one of the allowed choices.
    NotInEnumeratedSet,
    /// Required because of a sibling field's value.
    ConditionalRequired,
    /// Pattern or range check only applied because of a sibling field's value.
    ConditionalPatternOrRange,
}

impl ErrorKind {
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::Required => "required",
            ErrorKind::OutOfRange => "out_of_range",
            ErrorKind::NotInEnumeratedSet => "not_in_enumerated_set",
            ErrorKind::ConditionalRequired => "conditional_required",
            ErrorKind::ConditionalPatternOrRange => "conditional_pattern_or_range",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// All failed checks of one field, in evaluation order. Empty means valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOutcome {
    pub field: String,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The failure a form should display for this field.
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }
}

/// Outcome of validating one step: every field of the step, in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationResult {
    pub step: Step,
    pub fields: Vec<FieldOutcome>,
}

impl ValidationResult {
    pub fn new(step: Step) -> Self {
        Self {
            step,
            fields: Vec::new(),
        }
    }

    /// Returns true when no field failed.
    pub fn is_ok(&self) -> bool {
        self.fields.iter().all(FieldOutcome::is_valid)
    }

    pub fn push(&mut self, outcome: FieldOutcome) {
        self.fields.push(outcome);
    }

    pub fn field(&self, name: &str) -> Option<&FieldOutcome> {
        self.fields.iter().find(|outcome| outcome.field == name)
    }

    /// Every failure recorded for `name`; empty for valid or unknown fields.
    pub fn errors(&self, name: &str) -> &[FieldError] {
        self.field(name)
            .map(|outcome| outcome.errors.as_slice())
            .unwrap_or(&[])
    }

    pub fn first_error(&self, name: &str) -> Option<&FieldError> {
        self.field(name).and_then(FieldOutcome::first_error)
    }

    pub fn is_field_valid(&self, name: &str) -> bool {
        self.errors(name).is_empty()
    }

    pub fn failing_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|outcome| !outcome.is_valid())
            .map(|outcome| outcome.field.as_str())
    }

    /// Total number of failed checks across the step.
    pub fn error_count(&self) -> usize {
        self.fields.iter().map(|outcome| outcome.errors.len()).sum()
    }

    /// Field name to displayed message, for failing fields only.
    pub fn surfaced(&self) -> BTreeMap<String, String> {
        self.fields
            .iter()
            .filter_map(|outcome| {
                outcome
                    .first_error()
                    .map(|error| (outcome.field.clone(), error.message.clone()))
            })
            .collect()
    }
}

/// Results for every step of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormReport {
    pub steps: Vec<ValidationResult>,
}

impl FormReport {
    pub fn is_ok(&self) -> bool {
        self.steps.iter().all(ValidationResult::is_ok)
    }

    pub fn step(&self, step: Step) -> Option<&ValidationResult> {
        self.steps.iter().find(|result| result.step == step)
    }

    /// Earliest step with a failing field: where the form should send the user back to.
    pub fn first_failing_step(&self) -> Option<Step> {
        self.steps
            .iter()
            .filter(|result| !result.is_ok())
            .map(|result| result.step)
            .min()
    }
}
