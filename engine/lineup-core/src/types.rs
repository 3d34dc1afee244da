use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A roster slot type as Yahoo names it. The string forms are the wire
/// position codes, not an internal convenience naming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    C,
    LW,
    RW,
    D,
    G,
    Util,
    BN,
}

impl Position {
    pub fn code(self) -> &'static str {
        match self {
            Position::C => "C",
            Position::LW => "LW",
            Position::RW => "RW",
            Position::D => "D",
            Position::G => "G",
            Position::Util => "Util",
            Position::BN => "BN",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position code: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" => Ok(Position::C),
            "LW" => Ok(Position::LW),
            "RW" => Ok(Position::RW),
            "D" => Ok(Position::D),
            "G" => Ok(Position::G),
            "Util" => Ok(Position::Util),
            "BN" => Ok(Position::BN),
            other => Err(UnknownPosition(other.to_string())),
        }
    }
}

/// One rosterable player, as handed over by the roster collaborator.
///
/// Identity inside the engine is `full_name`; `player_key` is carried through
/// untouched for the roster-update client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPlayer {
    pub player_key: String,
    pub full_name: String,
    pub team_abbr: String,
    /// Empty means active; any non-empty value ("IR", "DTD", ...) excludes
    /// the player from the day's lineup.
    pub status: String,
    /// Eligibility in the order the source supplies it. The assigner scans
    /// this order as-is.
    pub eligible_positions: Vec<Position>,
}

impl RosterPlayer {
    pub fn is_active(&self) -> bool {
        self.status.is_empty()
    }
}

/// One entry of the externally curated priority list. Index in the list is
/// the player's desired rank.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub name: String,
    pub team: String,
}

/// The full priority list, in the JSON shape the curator maintains.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityList {
    pub players: Vec<PriorityEntry>,
}
