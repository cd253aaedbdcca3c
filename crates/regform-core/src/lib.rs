//! Core contracts for the regform registration form.
//!
//! This crate defines the raw form-state boundary, the coercion of raw input
//! into typed per-step records, and the error type shared by the validator and
//! the CLI.

pub mod error;
pub mod fields;
pub mod form;
pub mod input;
pub mod records;
pub mod step;

pub use error::{Error, Result};
pub use form::FormState;
pub use input::{FileRef, Input};
pub use records::{EmploymentStep, EnrollmentStep, IdentityStep, TeachingStep};
pub use step::Step;

/// Program literal for the nine month professional training track.
pub const PROFESSIONAL_TRAINING_PROGRAM: &str = "Professional Training Program - (9 Months)";
/// Program literal for the four month intensive code camp.
pub const INTENSIVE_CODE_CAMP: &str = "Intensive Code Camp - (4 Months)";
/// The two programs an applicant can enroll in.
pub const PROGRAMS: [&str; 2] = [PROFESSIONAL_TRAINING_PROGRAM, INTENSIVE_CODE_CAMP];

/// Accepted answers for the teaching interest question.
pub const TEACHING_INTERESTS: [&str; 3] = ["Business sessions", "Courses", "Both"];
