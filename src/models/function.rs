use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseErrorKind;

/// Job title held by an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DidacticFunction {
    Asistent,
    Lecturer,
    Teacher,
    Conferentiar,
}

impl DidacticFunction {
    pub const ALL: [DidacticFunction; 4] = [
        DidacticFunction::Asistent,
        DidacticFunction::Lecturer,
        DidacticFunction::Teacher,
        DidacticFunction::Conferentiar,
    ];

    /// Token used in the delimited line format
    pub fn as_str(&self) -> &'static str {
        match self {
            DidacticFunction::Asistent => "ASISTENT",
            DidacticFunction::Lecturer => "LECTURER",
            DidacticFunction::Teacher => "TEACHER",
            DidacticFunction::Conferentiar => "CONFERENTIAR",
        }
    }
}

impl FromStr for DidacticFunction {
    type Err = ParseErrorKind;

    /// Case-sensitive: "teacher" is not a valid token
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|function| function.as_str() == token)
            .ok_or_else(|| ParseErrorKind::UnknownFunction {
                token: token.to_string(),
            })
    }
}

impl fmt::Display for DidacticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
