//! set-lineup: fetch the day's snapshots, run the lineup engine, and submit
//! the optimized roster to Yahoo.

use alerting::{AlertConfig, Mailer};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use lineup_core::{optimize_lineup, sorted_players, Slot};
use lineup_service::{gather_inputs, initialize_logging, ServiceConfig};
use sportsdata_client::{SportsDataClient, SportsDataConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use yahoo_client::{YahooClient, YahooConfig};

#[derive(Debug, Parser)]
#[command(name = "set-lineup", about = "Submit the optimized daily lineup")]
struct Args {
    /// Service config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Compute and log the lineup without submitting it
    #[arg(long)]
    dry_run: bool,

    /// Also fetch and log the day's top scored projections
    #[arg(long)]
    show_projections: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_logging()?;

    let args = Args::parse();
    info!("Starting lineup optimizer v{}", env!("CARGO_PKG_VERSION"));

    let mailer = match AlertConfig::from_env() {
        Ok(config) => Some(Mailer::new(config)?),
        Err(e) => {
            warn!("Alerting disabled: {e}");
            None
        }
    };

    if let Err(e) = run(&args).await {
        if let Some(mailer) = &mailer {
            mailer.try_send_failure("Lineup Optimizer Failed", &format!("{e:#}")).await;
        }
        return Err(e);
    }

    info!("Lineup optimizer finished");
    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let config = ServiceConfig::load(args.config.as_deref())?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let mut yahoo = YahooClient::new(YahooConfig::from_env()?)?;
    let sports_data = SportsDataClient::new(SportsDataConfig::from_env()?)?;

    // Auth must hold before any roster call; everything after is fetched
    // concurrently and joined into the immutable input bundle.
    yahoo.refresh_auth().await.context("Yahoo auth failed")?;
    let inputs = gather_inputs(&yahoo, &sports_data, &config.priority_list, date).await?;

    let sorted = sorted_players(&inputs.priority, &inputs.roster, &inputs.schedule);
    info!(eligible = sorted.len(), "Filtered to active players with a game");

    let lineup = optimize_lineup(sorted);
    for slot in Slot::ALL {
        let names: Vec<&str> =
            lineup.bucket(slot).iter().map(|p| p.full_name.as_str()).collect();
        info!(slot = slot.code(), players = ?names);
    }

    if args.show_projections {
        let scored = sports_data.player_game_projections(date).await?;
        for (projection, score) in scored.iter().take(20) {
            info!(player = %projection.name, score = %format!("{score:.1}"), "projection");
        }
    }

    if args.dry_run {
        info!("Dry run, not submitting roster");
        return Ok(());
    }

    yahoo.set_roster(date, &lineup).await.context("Roster update failed")?;
    Ok(())
}
