use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PitchError {
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("Invalid speed tier: {0}")]
    InvalidSpeed(String),

    #[error("Player {name} has no location yet")]
    UnplacedPlayer { name: String },

    #[error("Invalid shirt number: {0} (expected 1..=99)")]
    InvalidNumber(i32),

    #[error("Name parts must not be empty")]
    EmptyName,

    #[error("Squad has no goalkeeper")]
    MissingGoalkeeper,

    #[error("Squad has {count} goalkeepers, expected exactly one")]
    MultipleGoalkeepers { count: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Roster error: {0}")]
    Roster(String),
}

impl From<serde_json::Error> for PitchError {
    fn from(err: serde_json::Error) -> Self {
        PitchError::Config(err.to_string())
    }
}

impl From<serde_yaml::Error> for PitchError {
    fn from(err: serde_yaml::Error) -> Self {
        PitchError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PitchError>;
