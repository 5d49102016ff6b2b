//! Roster files: two teams of plain player records in JSON or YAML.
//!
//! ```json
//! {
//!   "home": { "name": "Reds", "main": [ { "first": "Gigi", "last": "Buffon",
//!             "number": 1, "role": "GOALKEEPER", "age": 40, "height": 192 } ],
//!             "bench": [ null ] },
//!   "away": { ... }
//! }
//! ```

use crate::error::{PitchError, Result};
use crate::name::Name;
use crate::placement::Squad;
use crate::player::{Player, Speed};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub first: String,
    pub last: String,
    pub number: i32,
    pub role: String,
    pub age: u32,
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
}

impl PlayerRecord {
    pub fn into_player(self) -> Result<Player> {
        let name = Name::new(self.first, self.last)?;
        let player = Player::with_role_str(name, self.number, &self.role, self.age, self.height)?;
        let speed = match self.speed {
            Some(raw) => raw.parse::<Speed>()?,
            None => Speed::default(),
        };
        Ok(player.with_speed(speed))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRecord {
    pub name: String,
    pub main: Vec<PlayerRecord>,
    #[serde(default)]
    pub bench: Vec<Option<PlayerRecord>>,
}

impl SquadRecord {
    /// Build the squad and check it fields exactly one goalkeeper.
    pub fn into_squad(self) -> Result<Squad> {
        let main = self.main.into_iter().map(PlayerRecord::into_player).collect::<Result<Vec<_>>>()?;
        let bench = self
            .bench
            .into_iter()
            .map(|slot| slot.map(PlayerRecord::into_player).transpose())
            .collect::<Result<Vec<_>>>()?;
        let squad = Squad::new(main, bench);
        squad.validate()?;
        Ok(squad)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub home: SquadRecord,
    pub away: SquadRecord,
}

impl Roster {
    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| PitchError::Roster(e.to_string()))
    }

    pub fn from_yaml_str(input: &str) -> Result<Self> {
        serde_yaml::from_str(input).map_err(|e| PitchError::Roster(e.to_string()))
    }

    /// Load from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| PitchError::Roster(format!("{}: {}", path.display(), e)))?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            _ => Self::from_json_str(&text),
        }
    }
}
