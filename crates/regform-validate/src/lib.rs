//! Multi-step validation engine for the regform registration form.
//!
//! Each of the four steps has a [`rule::StepSchema`] of field rules; rules may
//! read sibling fields of the same step. [`StepValidator`] coerces raw form
//! state into the step's typed record and evaluates every field, returning a
//! [`ValidationResult`] that lists all failures per field.

pub mod intake;
pub mod patterns;
pub mod result;
pub mod rule;
pub mod schema;
pub mod steps;
pub mod validator;

pub use intake::{INITIAL_INTAKE_YEAR, IntakeOption, intake_count, intake_year_options};
pub use result::{ErrorKind, FieldError, FieldOutcome, FormReport, ValidationResult};
pub use schema::{form_report_json_schema, intake_options_json_schema, result_json_schema};
pub use validator::{StepValidator, current_calendar_year};
