use std::collections::HashSet;

/// One scheduled game, reduced to the two team abbreviations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub home_team: String,
    pub away_team: String,
}

/// The set of teams with a game on the target date.
#[derive(Clone, Debug, Default)]
pub struct Schedule {
    playing: HashSet<String>,
}

impl Schedule {
    pub fn from_games(games: &[Game]) -> Self {
        let mut playing = HashSet::with_capacity(games.len() * 2);
        for game in games {
            playing.insert(game.home_team.clone());
            playing.insert(game.away_team.clone());
        }
        Self { playing }
    }

    pub fn is_playing(&self, team_abbr: &str) -> bool {
        self.playing.contains(team_abbr)
    }

    pub fn team_count(&self) -> usize {
        self.playing.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_of_a_game_are_playing() {
        let sched = Schedule::from_games(&[
            Game { home_team: "COL".into(), away_team: "DET".into() },
            Game { home_team: "BOS".into(), away_team: "TOR".into() },
        ]);
        for team in ["COL", "DET", "BOS", "TOR"] {
            assert!(sched.is_playing(team), "{team} should be playing");
        }
        assert!(!sched.is_playing("NYR"));
        assert_eq!(sched.team_count(), 4);
    }

    #[test]
    fn empty_schedule_plays_nobody() {
        let sched = Schedule::from_games(&[]);
        assert!(!sched.is_playing("COL"));
        assert_eq!(sched.team_count(), 0);
    }
}
