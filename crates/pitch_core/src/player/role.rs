//! Role and speed tier: the two closed tags that drive placement, motion and drawing.

use crate::error::PitchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Goalkeeper, Role::Defender, Role::Midfielder, Role::Forward];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Role::Goalkeeper)
    }

    /// Upper-case name, as used in roster files and trace output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "GOALKEEPER",
            Role::Defender => "DEFENDER",
            Role::Midfielder => "MIDFIELDER",
            Role::Forward => "FORWARD",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Role::Goalkeeper => "GK",
            Role::Defender => "DEF",
            Role::Midfielder => "MID",
            Role::Forward => "FWD",
        }
    }

    /// Stable slot for per-role tables.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        match self {
            Role::Goalkeeper => 0,
            Role::Defender => 1,
            Role::Midfielder => 2,
            Role::Forward => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOALKEEPER" | "GK" => Ok(Role::Goalkeeper),
            "DEFENDER" | "DEF" | "DF" => Ok(Role::Defender),
            "MIDFIELDER" | "MID" | "MF" => Ok(Role::Midfielder),
            "FORWARD" | "FWD" | "FW" => Ok(Role::Forward),
            _ => Err(PitchError::InvalidRole(s.to_string())),
        }
    }
}

/// Width of the random displacement window a running outfield player draws from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Speed {
    #[default]
    Normal,
    Fast,
    Superfast,
}

impl Speed {
    pub fn value(&self) -> i32 {
        match self {
            Speed::Normal => 40,
            Speed::Fast => 60,
            Speed::Superfast => 80,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Speed::Normal => "NORMAL",
            Speed::Fast => "FAST",
            Speed::Superfast => "SUPERFAST",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speed {
    type Err = PitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" => Ok(Speed::Normal),
            "FAST" => Ok(Speed::Fast),
            "SUPERFAST" => Ok(Speed::Superfast),
            _ => Err(PitchError::InvalidSpeed(s.to_string())),
        }
    }
}
