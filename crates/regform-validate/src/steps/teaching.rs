use regform_core::{Step, TEACHING_INTERESTS, TeachingStep, fields};

use crate::patterns::Patterns;
use crate::rule::{StepSchema, field};

pub fn teaching_schema(patterns: &Patterns) -> StepSchema<TeachingStep> {
    StepSchema::new(
        Step::Teaching,
        vec![
            field(fields::PREFERRED_TEACHING_BRANCHES, |step: &TeachingStep| {
                &step.preferred_teaching_branches
            })
            .required("Preferred teaching branches are required.")
            .min_len(
                1,
                "Please choose at least one branch you're interested in teaching in",
            )
            .build(),
            // A blank submission was already normalized to an empty list.
            field(fields::PREFERRED_COURSES_TO_TEACH, |step: &TeachingStep| {
                &step.preferred_courses_to_teach
            })
            .each_matches(
                &patterns.course,
                "Preferred courses can only include letters, numbers, underscores, dashes, and spaces.",
            )
            .build(),
            field(fields::INTERESTED_IN_TEACHING, |step: &TeachingStep| {
                &step.interested_in_teaching
            })
            .required("Please select your teaching preferences")
            .one_of(
                &TEACHING_INTERESTS,
                "Please select a valid teaching preference (Business sessions, Courses or both).",
            )
            .build(),
        ],
    )
}
