use regform_core::{EmploymentStep, Input, Step, fields};

use crate::patterns::Patterns;
use crate::result::ErrorKind;
use crate::rule::{FieldRule, StepSchema, field};

pub const MIN_YEARS_OF_EXPERIENCE: f64 = 0.0;
pub const MAX_YEARS_OF_EXPERIENCE: f64 = 50.0;

pub fn employment_schema(patterns: &Patterns) -> StepSchema<EmploymentStep> {
    StepSchema::new(
        Step::Employment,
        vec![
            field(fields::IS_EMPLOYED, |step: &EmploymentStep| &step.is_employed)
                .required("Employment status is required.")
                .build(),
            employment_text(
                fields::FULL_JOB_TITLE,
                |step| &step.full_job_title,
                "Job title",
                patterns,
            ),
            employment_text(
                fields::COMPANY_NAME,
                |step| &step.company_name,
                "Company name",
                patterns,
            ),
            field(fields::YEARS_OF_EXPERIENCE, |step: &EmploymentStep| {
                &step.years_of_experience
            })
            .check(
                ErrorKind::ConditionalPatternOrRange,
                "Years of experience must be between 0 and 50.",
                |years, step| {
                    !step.is_employed.is_true()
                        || years.present().is_some_and(|years| {
                            (MIN_YEARS_OF_EXPERIENCE..=MAX_YEARS_OF_EXPERIENCE).contains(years)
                        })
                },
            )
            .build(),
            field(fields::HAS_FREELANCE_EXPERIENCE, |step: &EmploymentStep| {
                &step.has_freelance_experience
            })
            .required("Please specify if you have worked as a freelancer before.")
            .build(),
            field(fields::FREELANCING_INCOME, |step: &EmploymentStep| {
                &step.freelancing_income
            })
            .check(
                ErrorKind::ConditionalRequired,
                "Freelance gain is required .",
                |income, step| !step.has_freelance_experience.is_true() || income.has_text(),
            )
            .build(),
        ],
    )
}

/// Job title and company name share one shape: the pattern applies to any
/// supplied value, the value itself is only required from employed applicants.
fn employment_text(
    name: &'static str,
    value: fn(&EmploymentStep) -> &Input<String>,
    label: &str,
    patterns: &Patterns,
) -> FieldRule<EmploymentStep> {
    field(name, value)
        .matches(
            &patterns.employment_text,
            format!("{label} must contain only English letters."),
        )
        .check(
            ErrorKind::ConditionalRequired,
            format!("{label} is required."),
            |text, step| !step.is_employed.is_true() || text.has_text(),
        )
        .build()
}
