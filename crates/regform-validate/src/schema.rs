use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::intake::IntakeOption;
use crate::result::{FormReport, ValidationResult};

/// Emit the JSON Schema of a single-step validation result.
pub fn result_json_schema() -> RootSchema {
    schema_for!(ValidationResult)
}

/// Emit the JSON Schema of a whole-form report.
pub fn form_report_json_schema() -> RootSchema {
    schema_for!(FormReport)
}

/// Emit the JSON Schema of the intake option list.
pub fn intake_options_json_schema() -> RootSchema {
    schema_for!(Vec<IntakeOption>)
}
