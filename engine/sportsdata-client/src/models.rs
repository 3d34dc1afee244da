use lineup_core::Game;
use serde::{Deserialize, Serialize};

/// SportsDataIO NHL game, as returned by both GamesByDate and
/// StartingGoaltendersByDate (the latter fills the goaltender fields).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GameByDate {
    #[serde(rename = "HomeTeamID")]
    pub home_team_id: Option<i32>,

    #[serde(rename = "HomeTeam")]
    pub home_team: String,

    #[serde(rename = "AwayTeamID")]
    pub away_team_id: Option<i32>,

    #[serde(rename = "AwayTeam")]
    pub away_team: String,

    #[serde(rename = "HomeGoaltender")]
    pub home_goaltender: Option<Goaltender>,

    #[serde(rename = "AwayGoaltender")]
    pub away_goaltender: Option<Goaltender>,
}

impl GameByDate {
    /// Reduce to the engine's schedule shape.
    pub fn to_game(&self) -> Game {
        Game { home_team: self.home_team.clone(), away_team: self.away_team.clone() }
    }
}

/// Projected starting goaltender for one side of a game.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Goaltender {
    #[serde(rename = "PlayerID")]
    pub player_id: Option<i32>,

    #[serde(rename = "TeamID")]
    pub team_id: Option<i32>,

    #[serde(rename = "Team")]
    pub team: Option<String>,

    #[serde(rename = "FirstName")]
    pub first_name: Option<String>,

    #[serde(rename = "LastName")]
    pub last_name: Option<String>,

    #[serde(rename = "Confirmed", default)]
    pub confirmed: bool,
}

/// SportsDataIO skater game projection, restricted to the stat categories the
/// league scores.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct PlayerGameProjection {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Team")]
    pub team: Option<String>,

    #[serde(rename = "Goals", default)]
    pub goals: f64,

    #[serde(rename = "Assists", default)]
    pub assists: f64,

    #[serde(rename = "PlusMinus", default)]
    pub plus_minus: f64,

    #[serde(rename = "PenaltyMinutes", default)]
    pub penalty_minutes: f64,

    #[serde(rename = "PowerPlayGoals", default)]
    pub power_play_goals: f64,

    #[serde(rename = "PowerPlayAssists", default)]
    pub power_play_assists: f64,

    #[serde(rename = "ShortHandedGoals", default)]
    pub short_handed_goals: f64,

    #[serde(rename = "ShortHandedAssists", default)]
    pub short_handed_assists: f64,

    #[serde(rename = "ShotsOnGoal", default)]
    pub shots_on_goal: f64,

    #[serde(rename = "Hits", default)]
    pub hits: f64,

    #[serde(rename = "Blocks", default)]
    pub blocks: f64,
}
