//! Starting-goalie swap planning.
//!
//! The league grants two G slots; the operator rosters a goalie tandem from
//! each of two NHL teams. Which tandem member starts on a given night comes
//! from the projections feed, and the mapping from team to rostered goalie
//! keys lives in an external table so no player identifiers are hard-coded.

use anyhow::{Context, Result};
use lineup_core::Position;
use serde::{Deserialize, Serialize};
use sportsdata_client::{GameByDate, Goaltender};
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, warn};

/// One rostered goalie: Yahoo player key plus the last name used to match
/// the projections feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalieEntry {
    pub player_key: String,
    pub last_name: String,
}

/// The goalie tandem rostered from one NHL team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamGoalies {
    pub team_abbr: String,
    pub goalies: Vec<GoalieEntry>,
}

/// External goalie table (TOML), loaded once at startup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GoalieTable {
    #[serde(default)]
    pub teams: Vec<TeamGoalies>,
}

impl GoalieTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read goalie table {}", path.display()))?;
        let table: GoalieTable = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse goalie table {}", path.display()))?;
        for team in &table.teams {
            if team.goalies.len() != 2 {
                anyhow::bail!(
                    "goalie table entry for {} must list exactly 2 goalies, has {}",
                    team.team_abbr,
                    team.goalies.len()
                );
            }
        }
        info!(teams = table.teams.len(), "Loaded goalie table");
        Ok(table)
    }
}

/// Decide tonight's G/BN assignments for the configured goalie tandems.
///
/// - No configured team has a game: empty plan, the caller skips the update.
/// - Exactly one team has a game: both of its goalies start (two G slots,
///   nobody else to fill them); the idle tandems bench.
/// - Otherwise: each playing team's projected starter gets G and its partner
///   BN; idle tandems bench.
///
/// A starter whose last name matches neither tandem member means the table
/// is stale; that team is left untouched rather than guessed at.
pub fn plan_swaps(table: &GoalieTable, games: &[GameByDate]) -> Vec<(String, Position)> {
    let mut starters: HashMap<&str, &Goaltender> = HashMap::new();
    for game in games {
        if let Some(g) = &game.home_goaltender {
            starters.insert(game.home_team.as_str(), g);
        }
        if let Some(g) = &game.away_goaltender {
            starters.insert(game.away_team.as_str(), g);
        }
    }

    let playing: Vec<&TeamGoalies> =
        table.teams.iter().filter(|t| starters.contains_key(t.team_abbr.as_str())).collect();
    if playing.is_empty() {
        info!("No configured goalie team has a game, nothing to swap");
        return Vec::new();
    }

    let mut plan = Vec::new();
    for team in &table.teams {
        let Some(starter) = starters.get(team.team_abbr.as_str()) else {
            for goalie in &team.goalies {
                plan.push((goalie.player_key.clone(), Position::BN));
            }
            continue;
        };

        if playing.len() == 1 {
            // Only tandem in action tonight fills both G slots.
            for goalie in &team.goalies {
                plan.push((goalie.player_key.clone(), Position::G));
            }
            continue;
        }

        if !starter.confirmed {
            warn!(team = %team.team_abbr, "starter is projected, not confirmed");
        }
        let last_name = starter.last_name.as_deref().unwrap_or_default();
        if !team.goalies.iter().any(|g| g.last_name == last_name) {
            warn!(
                team = %team.team_abbr,
                starter = last_name,
                "starter matches no rostered goalie, leaving tandem untouched"
            );
            continue;
        }
        for goalie in &team.goalies {
            let slot = if goalie.last_name == last_name { Position::G } else { Position::BN };
            plan.push((goalie.player_key.clone(), slot));
        }
    }
    plan
}
