use crate::models::PlayerGameProjection;

// League scoring weights (Yahoo category values for this league).
const GOALS_BASE_WEIGHT: f64 = 25.0;
const ASSISTS_WEIGHT: f64 = 25.0;
const PLUS_MINUS_WEIGHT: f64 = 5.0;
const PENALTY_MINUTES_WEIGHT: f64 = 1.5;
const POWERPLAY_POINTS_WEIGHT: f64 = 10.0;
const SHORTHANDED_POINTS_WEIGHT: f64 = 20.0;
const SHOTS_ON_GOAL_WEIGHT: f64 = 2.0;
const HITS_WEIGHT: f64 = 1.5;
const BLOCKS_WEIGHT: f64 = 2.0;

// NHL league-wide average goals per game, used to estimate how often any
// given goal is the game-winner (GWG is a scored category but not projected
// by the feed, so goals carry its expected value).
const AVERAGE_GOALS_PER_GAME: f64 = 3.18;

/// Expected Yahoo fantasy points for one projected skater game.
pub fn fantasy_score(projection: &PlayerGameProjection) -> f64 {
    let average_goals_per_team = AVERAGE_GOALS_PER_GAME / 2.0;
    let probability_game_winning_goal = 1.0 / average_goals_per_team;
    let goals_weight = GOALS_BASE_WEIGHT * (1.0 + probability_game_winning_goal);

    projection.goals * goals_weight
        + projection.assists * ASSISTS_WEIGHT
        + projection.plus_minus * PLUS_MINUS_WEIGHT
        + projection.penalty_minutes * PENALTY_MINUTES_WEIGHT
        + (projection.power_play_goals + projection.power_play_assists) * POWERPLAY_POINTS_WEIGHT
        + (projection.short_handed_goals + projection.short_handed_assists)
            * SHORTHANDED_POINTS_WEIGHT
        + projection.shots_on_goal * SHOTS_ON_GOAL_WEIGHT
        + projection.hits * HITS_WEIGHT
        + projection.blocks * BLOCKS_WEIGHT
}
