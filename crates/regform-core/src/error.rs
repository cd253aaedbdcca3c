use thiserror::Error;

/// Core error type shared across regform crates.
///
/// Field-level validation failures are never reported through this type; they
/// are data in a validation result.
#[derive(Debug, Error)]
pub enum Error {
    /// A step number outside `1..=4` was requested.
    #[error("unknown step: {0} (expected 1-4)")]
    UnknownStep(u8),
    /// The supplied form state is not a JSON object.
    #[error("invalid form state: {0}")]
    InvalidFormState(String),
    /// A built-in field pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience alias for results returned by regform crates.
pub type Result<T> = std::result::Result<T, Error>;
