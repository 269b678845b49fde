use crate::{CoreError, Result as CoreErrorResult};

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// ADHD presentation tag stored on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdhdSubtype {
    Inattentive,
    Hyperactive,
    #[default]
    Combined,
}

impl AdhdSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inattentive => "inattentive",
            Self::Hyperactive => "hyperactive",
            Self::Combined => "combined",
        }
    }
}

impl FromStr for AdhdSubtype {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "inattentive" => Ok(Self::Inattentive),
            "hyperactive" => Ok(Self::Hyperactive),
            "combined" => Ok(Self::Combined),
            _ => Err(CoreError::validation(
                "adhd_subtype",
                format!("unknown ADHD subtype '{}'", s),
            )),
        }
    }
}

impl std::fmt::Display for AdhdSubtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
