use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Calendar year intake numbering counts from.
pub const INITIAL_INTAKE_YEAR: i32 = 1980;

/// One entry of the intake selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct IntakeOption {
    pub value: i64,
    pub label: String,
}

/// Intake options for `current_year`, newest intake first.
///
/// Yields `current_year - 1980` options with values counting down to 1, each
/// labelled with its own number. Empty for years up to 1980.
pub fn intake_year_options(current_year: i32) -> Vec<IntakeOption> {
    let count = intake_count(current_year);
    (0..count)
        .map(|index| {
            let value = count - index;
            IntakeOption {
                value,
                label: value.to_string(),
            }
        })
        .collect()
}

/// Number of intakes that exist in `current_year`.
pub fn intake_count(current_year: i32) -> i64 {
    i64::from(current_year.saturating_sub(INITIAL_INTAKE_YEAR)).max(0)
}
