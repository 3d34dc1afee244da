//! Typed schema for the Yahoo Fantasy XML wire format.
//!
//! Responses are decoded once, here, into optional-field structs; the rest of
//! the system only ever sees `lineup_core` types. Request bodies are built
//! from the same module so the wire contract lives in one place.

use lineup_core::{Position, RosterPlayer};
use serde::{Deserialize, Serialize};
use tracing::warn;

// ---------------------------------------------------------------------------
// Responses

/// Root of every Yahoo Fantasy response document.
#[derive(Debug, Deserialize)]
pub struct FantasyContent {
    pub team: TeamXml,
}

#[derive(Debug, Deserialize)]
pub struct TeamXml {
    #[serde(default)]
    pub team_key: String,
    #[serde(default)]
    pub name: Option<String>,
    pub roster: RosterXml,
}

#[derive(Debug, Deserialize)]
pub struct RosterXml {
    #[serde(default)]
    pub coverage_type: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub players: PlayersXml,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayersXml {
    #[serde(default)]
    pub player: Vec<PlayerXml>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerXml {
    pub player_key: String,
    pub name: PlayerNameXml,
    #[serde(rename = "editorial_team_abbr", default)]
    pub team_abbr: String,
    /// Absent for healthy players; "IR", "DTD", "NA", ... otherwise.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub eligible_positions: EligiblePositionsXml,
}

#[derive(Debug, Deserialize)]
pub struct PlayerNameXml {
    pub full: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct EligiblePositionsXml {
    #[serde(default)]
    pub position: Vec<String>,
}

impl PlayerXml {
    /// Convert to the engine's player type. Position codes outside the slot
    /// vocabulary (Yahoo adds e.g. "IR" for IR-eligible players) are dropped
    /// with a warning; they mean nothing to the assigner.
    pub fn into_roster_player(self) -> RosterPlayer {
        let mut eligible_positions = Vec::with_capacity(self.eligible_positions.position.len());
        for code in &self.eligible_positions.position {
            match code.parse::<Position>() {
                Ok(position) => eligible_positions.push(position),
                Err(_) => {
                    warn!(player = %self.name.full, code = %code, "ignoring unknown position code");
                }
            }
        }
        RosterPlayer {
            player_key: self.player_key,
            full_name: self.name.full,
            team_abbr: self.team_abbr,
            status: self.status.unwrap_or_default(),
            eligible_positions,
        }
    }
}

// ---------------------------------------------------------------------------
// Requests

/// Body of a roster-position PUT, serialized under a `fantasy_content` root.
#[derive(Debug, Serialize)]
pub struct RosterUpdate {
    roster: RosterUpdateBody,
}

#[derive(Debug, Serialize)]
struct RosterUpdateBody {
    coverage_type: String,
    date: String,
    players: UpdatePlayers,
}

#[derive(Debug, Serialize)]
struct UpdatePlayers {
    player: Vec<PlayerPosition>,
}

/// One `(player_key, position)` pair of a roster update.
#[derive(Debug, Serialize)]
pub struct PlayerPosition {
    player_key: String,
    position: String,
}

impl PlayerPosition {
    pub fn new(player_key: impl Into<String>, position: impl Into<String>) -> Self {
        Self { player_key: player_key.into(), position: position.into() }
    }
}

impl RosterUpdate {
    pub fn for_date(date: chrono::NaiveDate, players: Vec<PlayerPosition>) -> Self {
        Self {
            roster: RosterUpdateBody {
                coverage_type: "date".to_string(),
                date: date.format("%Y-%m-%d").to_string(),
                players: UpdatePlayers { player: players },
            },
        }
    }

    /// Build the full update for an optimized lineup: every bucket member is
    /// sent with its bucket's position code.
    pub fn from_lineup(date: chrono::NaiveDate, lineup: &lineup_core::OptimizedLineup) -> Self {
        let players = lineup
            .assignments()
            .map(|(slot, player)| PlayerPosition::new(&player.player_key, slot.code()))
            .collect();
        Self::for_date(date, players)
    }
}

/// Body of an add/drop transaction POST.
#[derive(Debug, Serialize)]
pub struct AddDropRequest {
    transaction: Transaction,
}

#[derive(Debug, Serialize)]
struct Transaction {
    #[serde(rename = "type")]
    kind: String,
    players: TransactionPlayers,
}

#[derive(Debug, Serialize)]
struct TransactionPlayers {
    player: Vec<TransactionPlayer>,
}

#[derive(Debug, Serialize)]
struct TransactionPlayer {
    player_key: String,
    transaction_data: TransactionData,
}

#[derive(Debug, Serialize)]
struct TransactionData {
    #[serde(rename = "type")]
    kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_team_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_team_key: Option<String>,
}

impl AddDropRequest {
    pub fn new(team_key: &str, add_key: &str, drop_key: &str) -> Self {
        Self {
            transaction: Transaction {
                kind: "add/drop".to_string(),
                players: TransactionPlayers {
                    player: vec![
                        TransactionPlayer {
                            player_key: add_key.to_string(),
                            transaction_data: TransactionData {
                                kind: "add".to_string(),
                                destination_team_key: Some(team_key.to_string()),
                                source_team_key: None,
                            },
                        },
                        TransactionPlayer {
                            player_key: drop_key.to_string(),
                            transaction_data: TransactionData {
                                kind: "drop".to_string(),
                                destination_team_key: None,
                                source_team_key: Some(team_key.to_string()),
                            },
                        },
                    ],
                },
            },
        }
    }
}

/// Serialize a request body under the `fantasy_content` root, with the XML
/// declaration Yahoo expects.
pub fn to_xml_body<T: Serialize>(value: &T) -> Result<String, quick_xml::DeError> {
    let doc = quick_xml::se::to_string_with_root("fantasy_content", value)?;
    Ok(format!("<?xml version=\"1.0\"?>\n{doc}"))
}
