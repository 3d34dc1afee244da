//! swap-goalies: read tonight's projected starters and put the right half of
//! each rostered goalie tandem into the G slots.

use alerting::{AlertConfig, Mailer};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use lineup_service::{initialize_logging, plan_swaps, GoalieTable, ServiceConfig};
use sportsdata_client::{SportsDataClient, SportsDataConfig};
use std::path::PathBuf;
use tracing::{info, warn};
use yahoo_client::{YahooClient, YahooConfig};

#[derive(Debug, Parser)]
#[command(name = "swap-goalies", about = "Start tonight's projected goalies")]
struct Args {
    /// Service config file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Compute and log the swaps without submitting them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    initialize_logging()?;

    let args = Args::parse();
    info!("Starting goalie swapper v{}", env!("CARGO_PKG_VERSION"));

    let mailer = match AlertConfig::from_env() {
        Ok(config) => Some(Mailer::new(config)?),
        Err(e) => {
            warn!("Alerting disabled: {e}");
            None
        }
    };

    if let Err(e) = run(&args).await {
        if let Some(mailer) = &mailer {
            mailer.try_send_failure("Goalie Switcher Failed", &format!("{e:#}")).await;
        }
        return Err(e);
    }

    info!("Goalie swapper finished");
    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let config = ServiceConfig::load(args.config.as_deref())?;
    let table = GoalieTable::load(&config.goalie_table)?;
    let date = args.date.unwrap_or_else(|| Local::now().date_naive());

    let mut yahoo = YahooClient::new(YahooConfig::from_env()?)?;
    let sports_data = SportsDataClient::new(SportsDataConfig::from_env()?)?;

    // Token refresh and the starters fetch are independent; join them.
    let (_, games) = tokio::try_join!(
        async { yahoo.refresh_auth().await.map_err(anyhow::Error::from) },
        sports_data.starting_goaltenders(date),
    )
    .context("Failed to prepare goalie swap")?;

    let plan = plan_swaps(&table, &games);
    if plan.is_empty() {
        info!("Nothing to swap today");
        return Ok(());
    }
    for (player_key, position) in &plan {
        info!(player_key = %player_key, position = position.code(), "planned swap");
    }

    if args.dry_run {
        info!("Dry run, not submitting swaps");
        return Ok(());
    }

    yahoo.swap_slots(date, &plan).await.context("Goalie swap failed")?;
    Ok(())
}
