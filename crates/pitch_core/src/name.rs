use crate::error::{PitchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Personal name split into first and last parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NameParts")]
pub struct Name {
    first: String,
    last: String,
}

#[derive(Deserialize)]
struct NameParts {
    first: String,
    last: String,
}

impl TryFrom<NameParts> for Name {
    type Error = PitchError;

    fn try_from(parts: NameParts) -> Result<Self> {
        Name::new(parts.first, parts.last)
    }
}

impl Name {
    /// Both parts are trimmed and must be non-empty afterwards.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Result<Self> {
        let first = first.into().trim().to_string();
        let last = last.into().trim().to_string();
        if first.is_empty() || last.is_empty() {
            return Err(PitchError::EmptyName);
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// First letter of the first name, as drawn on the shirt.
    pub fn initial(&self) -> String {
        self.first.chars().next().map(String::from).unwrap_or_default()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
