// lineup-core - deterministic daily lineup engine

mod assigner;
mod filter;
mod schedule;
mod types;

pub use assigner::{
    MAX_CENTERS, MAX_DEFENSEMEN, MAX_LEFT_WINGS, MAX_RIGHT_WINGS, MAX_UTILS, OptimizedLineup,
    Slot, optimize_lineup,
};
pub use filter::sorted_players;
pub use schedule::{Game, Schedule};
pub use types::{Position, PriorityEntry, PriorityList, RosterPlayer, UnknownPosition};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_then_assign_pipeline() {
        let roster = vec![
            RosterPlayer {
                player_key: "419.p.1".into(),
                full_name: "Top Center".into(),
                team_abbr: "COL".into(),
                status: String::new(),
                eligible_positions: vec![Position::C],
            },
            RosterPlayer {
                player_key: "419.p.2".into(),
                full_name: "Hurt Winger".into(),
                team_abbr: "COL".into(),
                status: "DTD".into(),
                eligible_positions: vec![Position::LW],
            },
            RosterPlayer {
                player_key: "419.p.3".into(),
                full_name: "Idle Defenseman".into(),
                team_abbr: "NYR".into(),
                status: String::new(),
                eligible_positions: vec![Position::D],
            },
        ];
        let priority = PriorityList {
            players: vec![
                PriorityEntry { name: "Top Center".into(), team: "COL".into() },
                PriorityEntry { name: "Hurt Winger".into(), team: "COL".into() },
                PriorityEntry { name: "Idle Defenseman".into(), team: "NYR".into() },
            ],
        };
        let schedule =
            Schedule::from_games(&[Game { home_team: "COL".into(), away_team: "DET".into() }]);

        let lineup = optimize_lineup(sorted_players(&priority, &roster, &schedule));
        assert_eq!(lineup.player_count(), 1);
        assert_eq!(lineup.c[0].full_name, "Top Center");
    }
}
