use crate::schedule::Schedule;
use crate::types::{PriorityList, RosterPlayer};
use std::collections::HashMap;
use tracing::debug;

/// Reduce the roster to the players worth slotting today, in priority order.
///
/// Priority-list membership is an inclusion gate, not just a ranking signal:
/// a rostered player absent from the list never enters the output, no matter
/// how eligible. Survivors must be active (empty status) and on a team that
/// plays today. Nothing here can fail; filtered players are simply absent.
pub fn sorted_players(
    priority: &PriorityList,
    roster: &[RosterPlayer],
    schedule: &Schedule,
) -> Vec<RosterPlayer> {
    let by_name: HashMap<&str, &RosterPlayer> =
        roster.iter().map(|p| (p.full_name.as_str(), p)).collect();

    let mut sorted = Vec::with_capacity(priority.players.len());
    for entry in &priority.players {
        let Some(player) = by_name.get(entry.name.as_str()) else {
            debug!(name = %entry.name, "priority entry not on roster, skipping");
            continue;
        };
        if !player.is_active() {
            debug!(name = %player.full_name, status = %player.status, "inactive, skipping");
            continue;
        }
        if !schedule.is_playing(&player.team_abbr) {
            debug!(name = %player.full_name, team = %player.team_abbr, "no game today, skipping");
            continue;
        }
        sorted.push((*player).clone());
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Game;
    use crate::types::{Position, PriorityEntry};

    fn player(name: &str, team: &str, status: &str) -> RosterPlayer {
        RosterPlayer {
            player_key: format!("419.p.{}", name.len()),
            full_name: name.to_string(),
            team_abbr: team.to_string(),
            status: status.to_string(),
            eligible_positions: vec![Position::C],
        }
    }

    fn entry(name: &str, team: &str) -> PriorityEntry {
        PriorityEntry { name: name.to_string(), team: team.to_string() }
    }

    fn schedule(teams: &[(&str, &str)]) -> Schedule {
        let games: Vec<Game> = teams
            .iter()
            .map(|(h, a)| Game { home_team: h.to_string(), away_team: a.to_string() })
            .collect();
        Schedule::from_games(&games)
    }

    #[test]
    fn output_follows_priority_order_not_roster_order() {
        let roster =
            vec![player("Zed", "COL", ""), player("Abe", "DET", ""), player("Mia", "COL", "")];
        let priority = PriorityList {
            players: vec![entry("Mia", "COL"), entry("Zed", "COL"), entry("Abe", "DET")],
        };
        let sorted = sorted_players(&priority, &roster, &schedule(&[("COL", "DET")]));
        let names: Vec<&str> = sorted.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, ["Mia", "Zed", "Abe"]);
    }

    #[test]
    fn non_empty_status_is_dropped_regardless_of_rank() {
        let roster = vec![player("Star", "COL", "IR"), player("Grinder", "COL", "")];
        let priority =
            PriorityList { players: vec![entry("Star", "COL"), entry("Grinder", "COL")] };
        let sorted = sorted_players(&priority, &roster, &schedule(&[("COL", "DET")]));
        let names: Vec<&str> = sorted.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, ["Grinder"]);
    }

    #[test]
    fn team_without_a_game_is_dropped() {
        let roster = vec![player("Home", "COL", ""), player("Idle", "NYR", "")];
        let priority = PriorityList { players: vec![entry("Home", "COL"), entry("Idle", "NYR")] };
        let sorted = sorted_players(&priority, &roster, &schedule(&[("COL", "DET")]));
        let names: Vec<&str> = sorted.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, ["Home"]);
    }

    #[test]
    fn priority_entry_missing_from_roster_is_silently_excluded() {
        // Scenario D.
        let roster = vec![player("Rostered", "COL", "")];
        let priority =
            PriorityList { players: vec![entry("Ghost", "COL"), entry("Rostered", "COL")] };
        let sorted = sorted_players(&priority, &roster, &schedule(&[("COL", "DET")]));
        let names: Vec<&str> = sorted.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, ["Rostered"]);
    }

    #[test]
    fn rostered_player_absent_from_priority_list_never_appears() {
        let roster = vec![player("Unranked", "COL", ""), player("Ranked", "COL", "")];
        let priority = PriorityList { players: vec![entry("Ranked", "COL")] };
        let sorted = sorted_players(&priority, &roster, &schedule(&[("COL", "DET")]));
        let names: Vec<&str> = sorted.iter().map(|p| p.full_name.as_str()).collect();
        assert_eq!(names, ["Ranked"]);
    }

    #[test]
    fn empty_priority_list_yields_empty_sequence() {
        let roster = vec![player("Anyone", "COL", "")];
        let sorted =
            sorted_players(&PriorityList::default(), &roster, &schedule(&[("COL", "DET")]));
        assert!(sorted.is_empty());
    }
}
