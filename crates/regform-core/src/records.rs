//! Typed per-step records.
//!
//! Each record holds exactly the fields its step validates, coerced from the
//! raw [`FormState`]. Building a record never fails.

use crate::fields;
use crate::form::FormState;
use crate::input::{self, FileRef, Input};

/// Step 1: who the applicant is.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityStep {
    pub full_name: Input<String>,
    pub personal_photo: Input<FileRef>,
    pub email: Input<String>,
    pub mobile: Input<String>,
    pub linkedin: Input<String>,
    pub city_of_birth: Input<String>,
}

impl IdentityStep {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            full_name: input::text(form.get(fields::FULL_NAME)),
            personal_photo: input::file(form.get(fields::PERSONAL_PHOTO)),
            email: input::text(form.get(fields::EMAIL)),
            mobile: input::text(form.get(fields::MOBILE)),
            linkedin: input::text(form.get(fields::LINKEDIN)),
            city_of_birth: input::text(form.get(fields::CITY_OF_BIRTH)),
        }
    }
}

/// Step 2: education and the program applied for.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentStep {
    pub faculty: Input<String>,
    pub university: Input<String>,
    pub track_name: Input<String>,
    pub branch: Input<String>,
    pub program: Input<String>,
    pub iti_graduation_year: Input<i64>,
    pub intake: Input<i64>,
    pub round: Input<String>,
}

impl EnrollmentStep {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            faculty: input::text(form.get(fields::FACULTY)),
            university: input::text(form.get(fields::UNIVERSITY)),
            track_name: input::text(form.get(fields::TRACK_NAME)),
            branch: input::text(form.get(fields::BRANCH)),
            program: input::text(form.get(fields::PROGRAM)),
            iti_graduation_year: input::integer(form.get(fields::ITI_GRADUATION_YEAR)),
            intake: input::integer(form.get(fields::INTAKE)),
            round: input::text(form.get(fields::ROUND)),
        }
    }
}

/// Step 3: what the applicant wants to teach.
#[derive(Debug, Clone, PartialEq)]
pub struct TeachingStep {
    pub preferred_teaching_branches: Input<Vec<String>>,
    pub preferred_courses_to_teach: Input<Vec<String>>,
    pub interested_in_teaching: Input<String>,
}

impl TeachingStep {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            preferred_teaching_branches: input::text_list(
                form.get(fields::PREFERRED_TEACHING_BRANCHES),
            ),
            preferred_courses_to_teach: input::text_list_or_blank(
                form.get(fields::PREFERRED_COURSES_TO_TEACH),
            ),
            interested_in_teaching: input::text(form.get(fields::INTERESTED_IN_TEACHING)),
        }
    }
}

/// Step 4: employment and freelancing background.
#[derive(Debug, Clone, PartialEq)]
pub struct EmploymentStep {
    pub is_employed: Input<bool>,
    pub full_job_title: Input<String>,
    pub company_name: Input<String>,
    pub years_of_experience: Input<f64>,
    pub has_freelance_experience: Input<bool>,
    pub freelancing_income: Input<String>,
}

impl EmploymentStep {
    pub fn from_form(form: &FormState) -> Self {
        Self {
            is_employed: input::boolean(form.get(fields::IS_EMPLOYED)),
            full_job_title: input::text(form.get(fields::FULL_JOB_TITLE)),
            company_name: input::text(form.get(fields::COMPANY_NAME)),
            years_of_experience: input::number(form.get(fields::YEARS_OF_EXPERIENCE)),
            has_freelance_experience: input::boolean(form.get(fields::HAS_FREELANCE_EXPERIENCE)),
            freelancing_income: input::text(form.get(fields::FREELANCING_INCOME)),
        }
    }
}
