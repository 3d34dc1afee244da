//! Snapshot acquisition for one optimization run.
//!
//! The three inputs are fetched concurrently and joined into one immutable
//! bundle; the engine only ever runs with all three present. Any fetch
//! failure aborts the run before the engine is invoked.

use crate::config::load_priority_list;
use anyhow::Result;
use chrono::NaiveDate;
use lineup_core::{PriorityList, RosterPlayer, Schedule};
use sportsdata_client::SportsDataClient;
use std::path::Path;
use tracing::info;
use yahoo_client::YahooClient;

/// One run's worth of input snapshots. Constructed once, never mutated.
pub struct LineupInputs {
    pub priority: PriorityList,
    pub roster: Vec<RosterPlayer>,
    pub schedule: Schedule,
}

/// Fetch the priority list, current roster, and day's schedule in parallel.
pub async fn gather_inputs(
    yahoo: &YahooClient,
    sports_data: &SportsDataClient,
    priority_path: &Path,
    date: NaiveDate,
) -> Result<LineupInputs> {
    let (priority, roster, games) = tokio::try_join!(
        load_priority_list(priority_path),
        async { yahoo.roster_players().await.map_err(anyhow::Error::from) },
        sports_data.games_by_date(date),
    )?;

    let schedule = Schedule::from_games(&games);
    info!(
        priority = priority.players.len(),
        roster = roster.len(),
        teams_playing = schedule.team_count(),
        %date,
        "Input snapshots gathered"
    );
    Ok(LineupInputs { priority, roster, schedule })
}
