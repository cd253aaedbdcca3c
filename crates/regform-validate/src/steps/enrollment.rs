use regform_core::{
    EnrollmentStep, INTENSIVE_CODE_CAMP, Input, PROFESSIONAL_TRAINING_PROGRAM, PROGRAMS, Step,
    fields,
};

use crate::intake::IntakeOption;
use crate::patterns::Patterns;
use crate::result::ErrorKind;
use crate::rule::{StepSchema, field};

/// First year ITI graduates exist for.
pub const FIRST_GRADUATION_YEAR: i64 = 1994;

pub fn enrollment_schema(
    patterns: &Patterns,
    current_year: i32,
    intake_options: &[IntakeOption],
) -> StepSchema<EnrollmentStep> {
    let intake_values = intake_options.iter().map(|option| option.value).collect();

    StepSchema::new(
        Step::Enrollment,
        vec![
            field(fields::FACULTY, |step: &EnrollmentStep| &step.faculty)
                .required("Faculty is required.")
                .matches(
                    &patterns.english_words,
                    "Faculty must be in English and cannot contain special characters.",
                )
                .build(),
            field(fields::UNIVERSITY, |step: &EnrollmentStep| &step.university)
                .required("University is required.")
                .matches(
                    &patterns.english_words,
                    "University must be in English and cannot contain special characters.",
                )
                .build(),
            field(fields::TRACK_NAME, |step: &EnrollmentStep| &step.track_name)
                .required("Track name is required.")
                .build(),
            field(fields::BRANCH, |step: &EnrollmentStep| &step.branch)
                .required("Branch is required.")
                .build(),
            field(fields::PROGRAM, |step: &EnrollmentStep| &step.program)
                .required("Program is required.")
                .one_of(&PROGRAMS, "Please select one of the two provided programs")
                .build(),
            field(fields::ITI_GRADUATION_YEAR, |step: &EnrollmentStep| {
                &step.iti_graduation_year
            })
            .required("ITI Graduation Year is required.")
            .at_least(
                FIRST_GRADUATION_YEAR,
                format!(
                    "Graduation year must be after {}.",
                    FIRST_GRADUATION_YEAR - 1
                ),
            )
            .at_most(
                i64::from(current_year),
                format!("Graduation year must be less than or equal to {current_year}."),
            )
            .build(),
            field(fields::INTAKE, |step: &EnrollmentStep| &step.intake)
                .required("Intake is required.")
                .member_of(intake_values, "Invalid intake value.")
                .check(
                    ErrorKind::ConditionalRequired,
                    "Invalid intake for the selected program.",
                    |intake, step| {
                        !step.program.is(PROFESSIONAL_TRAINING_PROGRAM)
                            || matches!(intake, Input::Present(value) if *value != 0)
                    },
                )
                .build(),
            field(fields::ROUND, |step: &EnrollmentStep| &step.round)
                .check(
                    ErrorKind::ConditionalRequired,
                    "Round is required for 4 Months program.",
                    |round, step| !step.program.is(INTENSIVE_CODE_CAMP) || round.has_text(),
                )
                .build(),
        ],
    )
}
