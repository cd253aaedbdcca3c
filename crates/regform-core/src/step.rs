use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One page of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Identity,
    Enrollment,
    Teaching,
    Employment,
}

impl Step {
    /// All steps in the order the form presents them.
    pub const ALL: [Step; 4] = [
        Step::Identity,
        Step::Enrollment,
        Step::Teaching,
        Step::Employment,
    ];

    /// 1-based position of the step in the form.
    pub fn number(self) -> u8 {
        match self {
            Step::Identity => 1,
            Step::Enrollment => 2,
            Step::Teaching => 3,
            Step::Employment => 4,
        }
    }
}

impl TryFrom<u8> for Step {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Step::Identity),
            2 => Ok(Step::Enrollment),
            3 => Ok(Step::Teaching),
            4 => Ok(Step::Employment),
            other => Err(Error::UnknownStep(other)),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Identity => "identity",
            Step::Enrollment => "enrollment",
            Step::Teaching => "teaching",
            Step::Employment => "employment",
        };
        write!(f, "step {} ({name})", self.number())
    }
}
