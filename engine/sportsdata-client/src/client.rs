use crate::models::{GameByDate, PlayerGameProjection};
use crate::scoring::fantasy_score;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use lineup_core::Game;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

const NHL_API_BASE_URL: &str = "https://api.sportsdata.io/v3/nhl";

/// SportsDataIO API configuration
#[derive(Debug, Clone)]
pub struct SportsDataConfig {
    pub api_key: String,
}

impl SportsDataConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("SPORTS_DATA_KEY").context("SPORTS_DATA_KEY not set")?;
        Ok(Self { api_key })
    }
}

/// SportsDataIO NHL client
pub struct SportsDataClient {
    config: SportsDataConfig,
    http: Client,
}

impl SportsDataClient {
    pub fn new(config: SportsDataConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { config, http })
    }

    /// Fetch the NHL schedule for a date, reduced to the engine's game shape.
    pub async fn games_by_date(&self, date: NaiveDate) -> Result<Vec<Game>> {
        let games = self.games_raw("scores", "GamesByDate", date).await?;
        Ok(games.iter().map(GameByDate::to_game).collect())
    }

    /// Fetch projected starting goaltenders for a date. Same game shape as
    /// the schedule endpoint, with the goaltender sides populated.
    pub async fn starting_goaltenders(&self, date: NaiveDate) -> Result<Vec<GameByDate>> {
        self.games_raw("projections", "StartingGoaltendersByDate", date).await
    }

    async fn games_raw(
        &self,
        section: &str,
        endpoint: &str,
        date: NaiveDate,
    ) -> Result<Vec<GameByDate>> {
        let url = format!(
            "{NHL_API_BASE_URL}/{section}/json/{endpoint}/{}",
            date.format("%Y-%m-%d")
        );
        info!("Fetching {endpoint} from: {url}");

        let response = self
            .http
            .get(&url)
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .send()
            .await
            .with_context(|| format!("Failed to fetch {endpoint}"))?;

        if !response.status().is_success() {
            anyhow::bail!("{endpoint} request failed with status: {}", response.status());
        }

        let games: Vec<GameByDate> = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {endpoint} JSON"))?;
        info!("Successfully fetched {} games from {endpoint}", games.len());
        Ok(games)
    }

    /// Fetch skater game projections for a date, scored with the league's
    /// fantasy weights. Returned sorted, best projection first.
    pub async fn player_game_projections(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(PlayerGameProjection, f64)>> {
        let url = format!(
            "{NHL_API_BASE_URL}/projections/json/PlayerGameProjectionStatsByDate/{}",
            date.format("%Y-%m-%d")
        );
        info!("Fetching player game projections from: {url}");

        let response = self
            .http
            .get(&url)
            .header("Ocp-Apim-Subscription-Key", &self.config.api_key)
            .send()
            .await
            .context("Failed to fetch player game projections")?;

        if !response.status().is_success() {
            anyhow::bail!("Projections request failed with status: {}", response.status());
        }

        let projections: Vec<PlayerGameProjection> = response
            .json()
            .await
            .context("Failed to parse player game projections JSON")?;
        info!("Successfully fetched {} player projections", projections.len());

        let mut scored: Vec<(PlayerGameProjection, f64)> =
            projections.into_iter().map(|p| { let s = fantasy_score(&p); (p, s) }).collect();
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        Ok(scored)
    }
}
