use chrono::{Datelike, Local};
use regform_core::{
    EmploymentStep, EnrollmentStep, FormState, IdentityStep, Result, Step, TeachingStep,
};
use tracing::debug;

use crate::intake::{IntakeOption, intake_year_options};
use crate::patterns::Patterns;
use crate::result::{FormReport, ValidationResult};
use crate::rule::StepSchema;
use crate::steps::{employment_schema, enrollment_schema, identity_schema, teaching_schema};

/// Validates the four steps of the registration form for one calendar year.
///
/// The year bounds the graduation year and determines the intake options.
/// A validator holds no per-call state and can be shared between sessions;
/// build a new one when the year changes (see [`StepValidator::is_current_for`]).
pub struct StepValidator {
    current_year: i32,
    intake_options: Vec<IntakeOption>,
    identity: StepSchema<IdentityStep>,
    enrollment: StepSchema<EnrollmentStep>,
    teaching: StepSchema<TeachingStep>,
    employment: StepSchema<EmploymentStep>,
}

impl StepValidator {
    pub fn new(current_year: i32) -> Result<Self> {
        let patterns = Patterns::compile()?;
        let intake_options = intake_year_options(current_year);

        debug!(
            current_year,
            intake_options = intake_options.len(),
            "step validator built"
        );

        Ok(Self {
            current_year,
            identity: identity_schema(&patterns),
            enrollment: enrollment_schema(&patterns, current_year, &intake_options),
            teaching: teaching_schema(&patterns),
            employment: employment_schema(&patterns),
            intake_options,
        })
    }

    /// Build a validator for the local calendar year.
    pub fn for_current_year() -> Result<Self> {
        Self::new(current_calendar_year())
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Whether this validator's year-dependent rules still apply in `year`.
    pub fn is_current_for(&self, year: i32) -> bool {
        self.current_year == year
    }

    /// Options for the intake selection control.
    pub fn intake_options(&self) -> &[IntakeOption] {
        &self.intake_options
    }

    /// Coerce the step's fields out of `form` and validate them.
    pub fn validate(&self, step: Step, form: &FormState) -> ValidationResult {
        match step {
            Step::Identity => self.validate_identity(&IdentityStep::from_form(form)),
            Step::Enrollment => self.validate_enrollment(&EnrollmentStep::from_form(form)),
            Step::Teaching => self.validate_teaching(&TeachingStep::from_form(form)),
            Step::Employment => self.validate_employment(&EmploymentStep::from_form(form)),
        }
    }

    /// Validate by 1-based step number, as a form router tracks it.
    pub fn validate_step_number(&self, step: u8, form: &FormState) -> Result<ValidationResult> {
        Ok(self.validate(Step::try_from(step)?, form))
    }

    /// Validate every step, as on final submission.
    pub fn validate_all(&self, form: &FormState) -> FormReport {
        FormReport {
            steps: Step::ALL
                .iter()
                .map(|step| self.validate(*step, form))
                .collect(),
        }
    }

    pub fn validate_identity(&self, record: &IdentityStep) -> ValidationResult {
        self.identity.evaluate(record)
    }

    pub fn validate_enrollment(&self, record: &EnrollmentStep) -> ValidationResult {
        self.enrollment.evaluate(record)
    }

    pub fn validate_teaching(&self, record: &TeachingStep) -> ValidationResult {
        self.teaching.evaluate(record)
    }

    pub fn validate_employment(&self, record: &EmploymentStep) -> ValidationResult {
        self.employment.evaluate(record)
    }

    /// Field names of `step`, in the order results list them.
    pub fn fields(&self, step: Step) -> Vec<&'static str> {
        match step {
            Step::Identity => self.identity.fields().collect(),
            Step::Enrollment => self.enrollment.fields().collect(),
            Step::Teaching => self.teaching.fields().collect(),
            Step::Employment => self.employment.fields().collect(),
        }
    }
}

/// Calendar year of the local wall clock.
pub fn current_calendar_year() -> i32 {
    Local::now().year()
}
